#[tokio::main]
async fn main() {
    you_flix_be::start_server().await;
}
