use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::error::StructuralError;
use crate::model::EndpointParam;

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

const OPTIONAL_FLAG: &str = "[optional]";
const OPTIONAL_PREFIX: &str = "[optional] ";

/// Walk the block's parameter rows, any nesting depth, in document order.
///
/// The first cell of a row decides what it is: `@param` rows become typed
/// parameters, the first `@return` row fills the return description and ends
/// the table, everything else is decorative and skipped. Returns `None` for
/// the parameter list when the block documents no parameters at all.
pub fn scan_rows(
    block: ElementRef,
    endpoint: &str,
) -> Result<(Option<Vec<EndpointParam>>, Option<String>), StructuralError> {
    let mut params = Vec::new();
    let mut return_desc = None;

    for row in block.select(&ROW) {
        let cells: Vec<ElementRef> = row.children().filter_map(ElementRef::wrap).collect();
        let Some(first) = cells.first() else {
            continue;
        };

        match first.text().collect::<String>().as_str() {
            "@return" => {
                let desc = cells
                    .get(1)
                    .ok_or_else(|| StructuralError::MalformedParamRow {
                        endpoint: endpoint.to_string(),
                        cells: cells.len(),
                    })?
                    .text()
                    .collect::<String>();
                return_desc = Some(desc);
                // First @return wins and ends the table.
                break;
            }
            "@param" => {
                if cells.len() < 4 {
                    return Err(StructuralError::MalformedParamRow {
                        endpoint: endpoint.to_string(),
                        cells: cells.len(),
                    });
                }

                let r#type = cells[1].text().collect::<String>();
                let name = cells[2].text().collect::<String>();
                let raw_desc = cells[3].text().collect::<String>();

                let is_optional = raw_desc.starts_with(OPTIONAL_FLAG);
                let description = raw_desc
                    .strip_prefix(OPTIONAL_PREFIX)
                    .map(str::to_string)
                    .unwrap_or(raw_desc);

                params.push(EndpointParam {
                    name,
                    r#type,
                    description,
                    is_optional,
                });
            }
            _ => {} // decorative or unrelated row
        }
    }

    let params = if params.is_empty() {
        None
    } else {
        Some(params)
    };
    Ok((params, return_desc))
}
