//! Classify one shelf photo against the reference exemplars.
//!
//! Reads `AZURE_OAI_ENDPOINT`, `AZURE_OAI_KEY`, `AZURE_OAI_DEPLOYMENT` (and
//! optionally `AZURE_OAI_API_VERSION`) from the environment or a `.env` file.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p shelf-classifier --example classify -- photos/aisle-7.jpg
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use shelf_classifier::{
    Classifier, ClassifierConfig, PromptLanguage, PromptTemplate, exemplar::DEFAULT_EXEMPLAR_DIR,
};

#[derive(Debug, Parser)]
#[command(about = "Rate how organized a shelf photo is")]
struct Args {
    /// Photo to classify
    image: PathBuf,

    /// Directory holding Organizado.jpg, Intermedio.jpg and Desorganizado.jpg
    #[arg(long, default_value = DEFAULT_EXEMPLAR_DIR)]
    exemplar_dir: PathBuf,

    /// Prompt language (es, en)
    #[arg(long, default_value = "es")]
    language: PromptLanguage,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let azure = azure_openai_ox::AzureConfig::from_env()
        .context("Azure OpenAI settings are incomplete")?;
    let config = ClassifierConfig::builder()
        .model(azure.deployment.as_str())
        .exemplars(shelf_classifier::ExemplarSet::from_dir(&args.exemplar_dir))
        .template(PromptTemplate::bundled(args.language))
        .build();
    let client = azure_openai_ox::AzureOpenAI::new(azure).context("cannot build HTTP client")?;
    let classifier = Classifier::new(config, client);

    let answer = classifier
        .classify(&args.image)
        .await
        .with_context(|| format!("classification of {} failed", args.image.display()))?;

    println!("{answer}");
    Ok(())
}
