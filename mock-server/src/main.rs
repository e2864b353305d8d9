use mock_server::MockState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    println!("post slides to http://{addr}/api/lessons/{{lesson_id}}/slides");
    mock_server::run(listener, MockState::default()).await
}
