use canonical::{CanonicalizeConfig, Message, StopWords};

fn main() {
    let stopwords = StopWords::from_words(["the", "to", "of", "a"]);
    let cfg = CanonicalizeConfig::default();

    let msg = Message::annotate(
        42,
        "RT .@NASA: The #Artemis crew is go for launch! http://go.nasa.gov/3xYz",
        &stopwords,
        &cfg,
    );

    println!("raw:        {}", msg.raw_text());
    println!("normalized: {}", msg.normalized_text());
    println!();
    println!("tokens:         {:?}", msg.tokens());
    println!("content tokens: {:?}", msg.content_tokens());
}
