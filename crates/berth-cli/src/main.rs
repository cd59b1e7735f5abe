use std::{fs, io::Write as _};

use berth_artifact::{classify, Artifact, Manifest, MEDIA_TYPE_IMAGE_MANIFEST};
use berth_processor::{DefaultProcessor, Processor, SchemaStrategy};
use berth_registry::DistributionClient;
use clap::Parser;
use cli::{Args, Commands, Target};
use logging::setup_logging;
use miette::IntoDiagnostic;
use tracing::{debug, info};

mod cli;
mod logging;

fn main() -> miette::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command {
        Commands::Classify { media_type } => {
            println!("{}", classify(&media_type));
        }
        Commands::Inspect { target } => {
            let (processor, mut artifact, manifest_bytes) = prepare(&target)?;
            processor.abstract_metadata(&mut artifact, &manifest_bytes)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&artifact).into_diagnostic()?
            );
        }
        Commands::Additions { target } => {
            let (processor, mut artifact, manifest_bytes) = prepare(&target)?;
            processor.abstract_metadata(&mut artifact, &manifest_bytes)?;
            for name in processor.list_addition_types(&artifact) {
                println!("{name}");
            }
        }
        Commands::Addition {
            target,
            name,
            output,
        } => {
            let (processor, mut artifact, manifest_bytes) = prepare(&target)?;
            processor.abstract_metadata(&mut artifact, &manifest_bytes)?;
            let addition = processor.abstract_addition(&artifact, &name)?;
            debug!("Content-Type: {}", addition.content_type);
            match output {
                Some(path) => {
                    fs::write(&path, &addition.content).into_diagnostic()?;
                    info!("Wrote {} to {}", name, path.display());
                }
                None => {
                    std::io::stdout()
                        .write_all(&addition.content)
                        .into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}

type CliProcessor = DefaultProcessor<DistributionClient>;

/// Builds the processor and the artifact record from a target description,
/// returning the raw manifest bytes alongside.
fn prepare(target: &Target) -> miette::Result<(CliProcessor, Artifact, Vec<u8>)> {
    let manifest_bytes = fs::read(&target.manifest).into_diagnostic()?;
    let manifest = Manifest::from_slice(&manifest_bytes).into_diagnostic()?;

    let mut client = DistributionClient::new(&target.api);
    if let Some(ref token) = target.token {
        client = client.token(token);
    }

    let strategy = if target.annotations {
        SchemaStrategy::AnnotationV1Alpha
    } else {
        SchemaStrategy::EmbeddedV1
    };
    let processor = DefaultProcessor::with_strategy(client, strategy);

    let manifest_media_type = manifest
        .media_type
        .clone()
        .unwrap_or_else(|| MEDIA_TYPE_IMAGE_MANIFEST.to_string());
    let mut artifact = Artifact::new(&target.repository)
        .with_media_type(&manifest.config.media_type)
        .with_manifest_media_type(manifest_media_type);
    artifact.artifact_type = processor.artifact_type(&artifact);

    Ok((processor, artifact, manifest_bytes))
}
