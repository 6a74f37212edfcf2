use crate::api::{ApiRequest, ApiResponse, QuizApi};
use crate::logger;
use crossbeam_channel::{Receiver, Sender};
use std::thread;

/// Runs requests on a dedicated thread, one at a time, in the order received.
/// The thread exits once the request channel is closed.
pub fn spawn_api_worker(
    api: QuizApi,
    requests: Receiver<ApiRequest>,
    responses: Sender<ApiResponse>,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let handle = thread::Builder::new()
        .name("quiz-client::api_worker".to_string())
        .spawn(move || {
            logger::log(&format!("API worker started for {}", api.base_url()));
            while let Ok(request) = requests.recv() {
                let response = runtime.block_on(api.execute(request));
                if responses.send(response).is_err() {
                    break;
                }
            }
            logger::log("API worker channel disconnected, exiting");
        })?;

    Ok(handle)
}
