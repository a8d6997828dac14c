use dotenv::dotenv;

use agendar::app::{self, Console};
use agendar::client::GraphqlClient;

#[tokio::main]
async fn main() {
    dotenv().ok();
    // log::* records are picked up through the subscriber's log bridge
    tracing_subscriber::fmt::init();

    let endpoint = match std::env::var("API_URL") {
        Ok(endpoint) => endpoint,
        Err(_) => {
            println!("API_URL is not set. Please configure the GraphQL endpoint.");
            std::process::exit(1);
        }
    };
    println!("🚀 Usando a API em {}", endpoint);

    let client = GraphqlClient::new(endpoint);
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin, stdout);

    if let Err(e) = app::run(&client, &mut console).await {
        log::error!("erro de terminal: {:?}", e);
        std::process::exit(1);
    }
}
