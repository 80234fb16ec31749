use scraper::{Html, Selector};
use thiserror::Error;

/// Class marker carried by the listing page's municipality selector block.
const SELECTOR_BLOCK: &str = r#"[class*="publicFredningslisteText"]"#;

/// Anchors sitting directly under a result list block.
const RESULT_LINKS: &str = r#"div[class*="list_results clearfix"] > a"#;

/// Option value the site renders for "no municipality selected".
const NO_SELECTION: &str = "-1";

/// Length of the path prefix in front of the case number in a result href.
const CASE_HREF_PREFIX_LEN: usize = 15;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no element with the municipality selector class on the listing page")]
    MissingSelectorBlock,

    #[error("result link #{index} has no href attribute")]
    MissingLinkTarget { index: usize },
}

/// Extract municipality identifiers from the listing page.
///
/// The page must carry the selector block (an element whose class contains
/// `publicFredningslisteText`). Option values are then collected across the
/// whole document, not just that block's subtree; the listing page renders a
/// single select control. The `-1` placeholder entry is excluded. Results
/// come back in document order, duplicates kept.
pub fn municipality_ids(html: &str) -> Result<Vec<String>, ExtractError> {
    let document = Html::parse_document(html);

    let block_sel = Selector::parse(SELECTOR_BLOCK).expect("valid selector");
    document
        .select(&block_sel)
        .next()
        .ok_or(ExtractError::MissingSelectorBlock)?;

    let option_sel = Selector::parse("option").expect("valid selector");
    let ids = document
        .select(&option_sel)
        .filter_map(|option| option.value().attr("value"))
        .filter(|value| *value != NO_SELECTION)
        .map(str::to_string)
        .collect();
    Ok(ids)
}

/// Extract case numbers from a municipality result page.
///
/// A case number is the tail of a result link's href after the fixed
/// 15-character path prefix. A result link without an href aborts the
/// extraction rather than being skipped. A page with no result block
/// yields an empty list.
pub fn case_numbers(html: &str) -> Result<Vec<String>, ExtractError> {
    let document = Html::parse_document(html);

    let link_sel = Selector::parse(RESULT_LINKS).expect("valid selector");
    let mut numbers = Vec::new();
    for (index, link) in document.select(&link_sel).enumerate() {
        let href = link
            .value()
            .attr("href")
            .ok_or(ExtractError::MissingLinkTarget { index })?;
        numbers.push(href.chars().skip(CASE_HREF_PREFIX_LEN).collect());
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    // "/fbb/case-view/" is exactly the 15 characters in front of the token.
    const RESULT_PAGE: &str = r#"
        <html><body>
        <h1>Fredede bygninger</h1>
        <div class="list_results clearfix">
            <a href="/fbb/case-view/CASE1">Bredgade 68</a>
            <a href="/fbb/case-view/CASE2">Amaliegade 13</a>
        </div>
        </body></html>
        "#;

    const LISTING_PAGE: &str = r#"
        <html><body>
        <div class="publicFredningslisteText">
            <select name="kommune">
                <option value="-1">Vælg kommune</option>
                <option value="101">København</option>
                <option value="151">Ballerup</option>
            </select>
        </div>
        </body></html>
        "#;

    #[test]
    fn municipality_ids_skip_the_placeholder() {
        let ids = municipality_ids(LISTING_PAGE).unwrap();
        assert_eq!(ids, ["101", "151"]);
    }

    #[test]
    fn municipality_ids_cover_the_whole_document() {
        let html = r#"
            <html><body>
            <div class="publicFredningslisteText"></div>
            <select name="sort"><option value="999">Newest first</option></select>
            </body></html>
            "#;
        let ids = municipality_ids(html).unwrap();
        assert_eq!(ids, ["999"]);
    }

    #[test]
    fn municipality_ids_require_the_selector_block() {
        let err = municipality_ids("<html><body><option value=\"101\"></option></body></html>")
            .unwrap_err();
        assert!(matches!(err, ExtractError::MissingSelectorBlock));
    }

    #[test]
    fn case_numbers_strip_the_path_prefix_in_document_order() {
        let numbers = case_numbers(RESULT_PAGE).unwrap();
        assert_eq!(numbers, ["CASE1", "CASE2"]);
    }

    #[test]
    fn case_numbers_only_take_direct_children_of_the_result_block() {
        let html = r#"
            <div class="list_results clearfix">
                <a href="/fbb/case-view/CASE1">hit</a>
                <span><a href="/fbb/case-view/NESTED">miss</a></span>
            </div>
            "#;
        let numbers = case_numbers(html).unwrap();
        assert_eq!(numbers, ["CASE1"]);
    }

    #[test]
    fn case_numbers_fail_on_a_link_without_href() {
        let html = r#"
            <div class="list_results clearfix">
                <a href="/fbb/case-view/CASE1">ok</a>
                <a name="broken">no target</a>
            </div>
            "#;
        let err = case_numbers(html).unwrap_err();
        assert!(matches!(err, ExtractError::MissingLinkTarget { index: 1 }));
    }

    #[test]
    fn case_numbers_are_empty_without_a_result_block() {
        let numbers = case_numbers("<html><body><a href=\"/x\">elsewhere</a></body></html>")
            .unwrap();
        assert!(numbers.is_empty());
    }
}
