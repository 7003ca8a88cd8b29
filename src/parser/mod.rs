pub mod params;
pub mod samples;

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use scraper::{ElementRef, Html, Selector};

use crate::error::StructuralError;
use crate::model::EndpointDoc;

/// Class marker carried by every endpoint-detail block on the page.
const ENDPOINT_MARKER: &str = "div.function_details";

/// Extraction fan-out degree; override with --workers.
pub const DEFAULT_WORKERS: usize = 8;

static ENDPOINT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ENDPOINT_MARKER).unwrap());

/// Find every endpoint block on the page and return its outer HTML.
///
/// Owned fragments are what crosses into the worker pool; the parse tree
/// itself is not `Send`, so each worker re-parses its own block.
pub fn discover_blocks(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    document.select(&ENDPOINT).map(|el| el.html()).collect()
}

/// Extract all endpoint records on a bounded worker pool, then sort by name.
///
/// Blocks are independent; the only shared state is the joined result vector.
/// The first structural failure cancels the whole run and no partial output
/// survives it.
pub fn extract_all(blocks: &[String], workers: usize) -> anyhow::Result<Vec<EndpointDoc>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    let pb = ProgressBar::new(blocks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut docs = pool.install(|| {
        blocks
            .par_iter()
            .map(|fragment| {
                let doc = parse_endpoint(fragment);
                pb.inc(1);
                doc
            })
            .collect::<Result<Vec<_>, StructuralError>>()
    })?;
    pb.finish_and_clear();

    docs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(docs)
}

/// Parse one endpoint block fragment into a record.
pub fn parse_endpoint(fragment: &str) -> Result<EndpointDoc, StructuralError> {
    let html = Html::parse_fragment(fragment);
    let block = html
        .select(&ENDPOINT)
        .next()
        .ok_or(StructuralError::MissingMarker)?;
    extract_record(block)
}

fn extract_record(block: ElementRef) -> Result<EndpointDoc, StructuralError> {
    let name = block
        .value()
        .attr("id")
        .map(str::to_string)
        .ok_or(StructuralError::MissingName)?;

    // First direct <p> child is the endpoint's introductory paragraph.
    let description = block
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "p")
        .map(|el| el.text().collect::<String>())
        .ok_or_else(|| StructuralError::MissingDescription {
            endpoint: name.clone(),
        })?;

    let (params, return_desc) = params::scan_rows(block, &name)?;
    let samples = samples::collect(block, &name)?;

    Ok(EndpointDoc {
        name,
        description,
        params,
        return_desc,
        requests: samples.requests,
        responses: samples.responses,
        errors: samples.errors,
    })
}
