use canonical::{CanonicalizeConfig, StopWords};
use ingest::{CorpusBuilder, CorpusPair, RawMessage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stopwords = StopWords::from_words(["the", "to", "some", "more"]);
    let cfg = CanonicalizeConfig::default();

    let left = CorpusBuilder::new("cnnbrk")
        .fetched([
            RawMessage::new(901, "Markets fall sharply today http://cnn.it/abc"),
            RawMessage::new(902, "#Breaking: Storm makes landfall"),
        ])
        .inject(["Adding some messages to timeline."])
        .build(&stopwords, &cfg)?;

    let right = CorpusBuilder::new("nasa")
        .fetched([RawMessage::new(311, "Liftoff! .@NASA_Orion is on its way")])
        .inject(["Adding more messages to timeline."])
        .build(&stopwords, &cfg)?;

    let pair = CorpusPair::new(left, right)?;
    for msg in pair.left().iter().chain(pair.right().iter()) {
        println!("[{:>4}] {:?} -> {:?}", msg.id(), msg.normalized_text(), msg.content_tokens());
    }
    println!("expected duplicate pairs: {}", pair.expected_pairs());
    Ok(())
}
