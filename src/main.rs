use anyhow::Context;
use ecm_atlas::{compute_statistics, Corpus, HttpServer, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Neural ECM Atlas v{}", ecm_atlas::version());

    let mut args = std::env::args().skip(1);
    let corpus = match (args.next(), args.next(), args.next()) {
        // Served mode over user-provided corpus files.
        (Some(ecm_path), Some(cell_types_path), None) => {
            Corpus::from_files(&ecm_path, &cell_types_path)
                .context("failed to load corpus files")?
        }
        // Static mode: corpus bundled into the binary.
        (None, ..) => Corpus::bundled().context("failed to load bundled corpus")?,
        _ => anyhow::bail!("usage: ecm-atlas [<ecm_components.json> <cell_types.json>]"),
    };

    let stats = compute_statistics(&corpus);
    info!(
        components = stats.total_ecm_components,
        cell_types = stats.total_cell_types,
        unique_genes = stats.unique_gene_count,
        unique_proteases = stats.unique_protease_count,
        "corpus loaded"
    );

    let server = HttpServer::new(ServerConfig::from_env(), corpus);
    server.start().await?;

    Ok(())
}
