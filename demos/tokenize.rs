use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tokenize_client::{
    ChatDetokenizeRequest, ChatTokenizeRequest, ClientConfig, HttpClientConfig, LlmError, Message,
    RequestContext, TextTokenizeRequest, TokenizeClient, TokenizerProvider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tokenize_client=debug")),
        )
        .init();

    let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
    let base_url =
        env::var("TOKENIZE_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let model = env::var("TOKENIZE_MODEL")
        .unwrap_or_else(|_| "meta-llama/Llama-3.1-8B-Instruct".to_string());

    let http_config = HttpClientConfig {
        timeout: Duration::from_secs(10),
        ..HttpClientConfig::default()
    };
    let config = ClientConfig::default_config_with_url(api_key, base_url)
        .with_http_config(&http_config)?;
    let client = TokenizeClient::new(config)?;

    // Give up on any single call after 5 seconds.
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(5));

    let text = client
        .create_text_tokenize(&ctx, TextTokenizeRequest::new(&model, "Explain how AI works"))
        .await?;
    println!(
        "Text: {} tokens (max model length {})",
        text.count, text.max_model_length
    );

    let chat = client
        .create_chat_tokenize(
            &ctx,
            ChatTokenizeRequest::new(
                &model,
                vec![
                    Message::system("You are a helpful assistant."),
                    Message::user("Tell me a random fact about space."),
                ],
            )
            .add_generation_prompt(true),
        )
        .await?;
    println!("Chat: {} tokens", chat.count);

    match client
        .create_chat_detokenize(&ctx, ChatDetokenizeRequest::new(&model, chat.tokens.clone()))
        .await
    {
        Ok(detokenized) => println!("Round trip:\n{}", detokenized.prompt),
        Err(LlmError::Api {
            status_code, message, ..
        }) => println!("Detokenize rejected ({status_code}): {message}"),
        Err(e) => return Err(e.into()),
    }

    let limits = chat.metadata.rate_limits();
    if let Some(remaining) = limits.remaining_requests {
        println!("Remaining requests: {remaining}");
    }

    Ok(())
}
