// src/specs/facilities.rs
//
// Listing table on `selectPageListBbs.do`:
//
//   <table class="p-table simple">
//     <tbody>
//       <tr><td>No.</td><td>field 1</td> … <td>field N</td></tr>
//
// Column 0 is the row number and never maps to a field. Rows narrower than
// the board schema are header or "no results" rows.

use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::config::boards::{BoardConfig, TypeSource};
use crate::config::consts::{CELL_SELECTOR, ROW_SELECTOR, TYPE_KEY};
use crate::core::sanitize::type_matches;

static ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ROW_SELECTOR).expect("static row selector"));
static CELLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CELL_SELECTOR).expect("static cell selector"));

/// One table row: schema field → cell text, plus `종별` when the type is known.
pub type FacilityRecord = IndexMap<String, String>;

/// Parse result for one page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Rows that passed the type filter, in table order.
    pub records: Vec<FacilityRecord>,
    /// At least one row was wide enough to be data, filtered or not.
    pub has_rows: bool,
}

pub fn parse_facilities(html: &str, board: &BoardConfig) -> ParsedPage {
    let doc = Html::parse_document(html);
    let mut page = ParsedPage::default();

    for row in doc.select(&ROWS) {
        let cells = row_cells(row);
        if cells.len() < board.min_cells() {
            continue;
        }
        page.has_rows = true;

        let mut record: FacilityRecord = board
            .fields
            .iter()
            .zip(&cells[1..])
            .map(|(field, cell)| (s!(*field), cell.clone()))
            .collect();

        let type_value = resolve_type(&record, board.type_source);

        if board.allowed_types.is_some() {
            match type_value.as_deref() {
                None | Some("") => continue,
                Some(v) if !type_matches(v, board.allowed_types) => continue,
                Some(_) => {}
            }
        }

        if let Some(v) = type_value.filter(|v| !v.is_empty()) {
            record.insert(s!(TYPE_KEY), v);
        }
        page.records.push(record);
    }

    logd!(
        "[{}] parsed {} record(s), has_rows={}",
        board.name,
        page.records.len(),
        page.has_rows
    );
    page
}

/// A field that is present wins even when its cell is empty.
fn resolve_type(record: &FacilityRecord, source: TypeSource) -> Option<String> {
    match source {
        TypeSource::Field(key) => record.get(key).cloned(),
        TypeSource::Constant(value) => Some(s!(value)),
        TypeSource::None => None,
    }
}

/// Text of every `td`, each text node trimmed then joined.
fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELLS)
        .map(|td| td.text().map(str::trim).collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::boards::{BoardConfig, BOARDS};

    fn page(rows: &[&[&str]]) -> String {
        let mut body = s!();
        for cells in rows {
            body.push_str("<tr>");
            for c in *cells {
                body.push_str(&format!("<td>{c}</td>"));
            }
            body.push_str("</tr>\n");
        }
        format!(
            r#"<html><body>
            <table class="p-table simple">
              <thead><tr><th>번호</th><th>기관명</th></tr></thead>
              <tbody>{body}</tbody>
            </table>
            </body></html>"#
        )
    }

    fn medical() -> &'static BoardConfig {
        &BOARDS[0]
    }
    fn pharmacies() -> &'static BoardConfig {
        &BOARDS[1]
    }
    fn clinics() -> &'static BoardConfig {
        &BOARDS[2]
    }

    #[test]
    fn allowed_hospital_row_is_kept_with_type_key() {
        let html = page(&[&["1", "서울병원", "종합병원", "서울시 ...", "02-000-0000"]]);
        let parsed = parse_facilities(&html, medical());

        assert!(parsed.has_rows);
        assert_eq!(parsed.records.len(), 1);
        let rec = &parsed.records[0];
        let pairs: Vec<(&str, &str)> = rec.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("기관명", "서울병원"),
                ("기관종명", "종합병원"),
                ("주소", "서울시 ..."),
                ("전화번호", "02-000-0000"),
                ("종별", "종합병원"),
            ]
        );
    }

    #[test]
    fn disallowed_type_is_filtered_but_has_rows() {
        let html = page(&[&["1", "서울내과", "내과", "서울시 ...", "02-000-0000"]]);
        let parsed = parse_facilities(&html, medical());
        assert!(parsed.records.is_empty());
        assert!(parsed.has_rows);
    }

    #[test]
    fn short_rows_are_ignored() {
        let html = page(&[&["등록된 게시물이 없습니다."], &["1", "a", "b", "c"]]);
        for board in BOARDS {
            let parsed = parse_facilities(&html, board);
            assert!(parsed.records.is_empty(), "{}", board.name);
            assert!(!parsed.has_rows, "{}", board.name);
        }
    }

    #[test]
    fn missing_table_is_empty() {
        let parsed = parse_facilities("<html><body><p>점검 중</p></body></html>", medical());
        assert_eq!(parsed, ParsedPage::default());
    }

    #[test]
    fn other_tables_are_not_read() {
        let html = r#"<table class="p-table"><tbody>
            <tr><td>1</td><td>a</td><td>종합병원</td><td>c</td><td>d</td></tr>
            </tbody></table>"#;
        assert!(!parse_facilities(html, medical()).has_rows);
    }

    #[test]
    fn pharmacies_get_constant_type() {
        let html = page(&[
            &["1", "온누리약국", "031-000-0000", "상록구보건소", "안산시 상록구"],
            &["2", "", "", "", ""],
        ]);
        let parsed = parse_facilities(&html, pharmacies());
        assert_eq!(parsed.records.len(), 2);
        for rec in &parsed.records {
            assert_eq!(rec.get("종별").map(String::as_str), Some("일반약국"));
            assert_eq!(rec.len(), 5);
        }
        assert_eq!(parsed.records[0]["관리기관"], "상록구보건소");
    }

    #[test]
    fn clinic_type_overwrites_schema_field_in_place() {
        let html = page(&[&["1", "튼튼소아과", "031-111-1111", "소아과 의원", "안산시"]]);
        let parsed = parse_facilities(&html, clinics());
        assert_eq!(parsed.records.len(), 1);
        let rec = &parsed.records[0];
        assert_eq!(rec.len(), 4);
        assert_eq!(rec.get_index(2).map(|(k, v)| (k.as_str(), v.as_str())), Some(("종별", "소아과 의원")));
    }

    #[test]
    fn spacing_variants_match_but_are_stored_as_extracted() {
        let html = page(&[&["1", "튼튼소아과", "031-111-1111", "소아과의원", "안산시"]]);
        let parsed = parse_facilities(&html, clinics());
        assert_eq!(parsed.records[0]["종별"], "소아과의원");
    }

    #[test]
    fn cell_text_is_trimmed() {
        let html = page(&[&["1", "  서울병원 ", "\n 병원 \n", " 주소 ", " 02 "]]);
        let parsed = parse_facilities(&html, medical());
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0]["기관명"], "서울병원");
        assert_eq!(parsed.records[0]["종별"], "병원");
    }

    #[test]
    fn nested_markup_is_flattened() {
        let html = page(&[&["1", "<a href=\"#\"> 서울병원 </a>", "<span>병원</span>", "주소", "02"]]);
        let parsed = parse_facilities(&html, medical());
        assert_eq!(parsed.records[0]["기관명"], "서울병원");
    }

    #[test]
    fn empty_type_cell_is_rejected_under_allow_list() {
        let html = page(&[&["1", "서울병원", "", "주소", "02"]]);
        let parsed = parse_facilities(&html, medical());
        assert!(parsed.records.is_empty());
        assert!(parsed.has_rows);
    }

    #[test]
    fn empty_type_cell_without_allow_list_adds_no_type_key() {
        static OPEN: BoardConfig = BoardConfig {
            name: "open",
            params: &[],
            pages: 1..=1,
            fields: &["기관명", "종별"],
            output: "open.json",
            type_source: TypeSource::Field("종별"),
            allowed_types: None,
        };
        let html = page(&[&["1", "a", ""], &["2", "b", "보건소"]]);
        let parsed = parse_facilities(&html, &OPEN);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0]["종별"], "");
        assert_eq!(parsed.records[1]["종별"], "보건소");
    }

    #[test]
    fn untyped_board_rejects_everything_under_allow_list() {
        static STRICT: BoardConfig = BoardConfig {
            name: "strict",
            params: &[],
            pages: 1..=1,
            fields: &["기관명"],
            output: "strict.json",
            type_source: TypeSource::None,
            allowed_types: Some(&["병원"]),
        };
        let parsed = parse_facilities(&page(&[&["1", "병원"]]), &STRICT);
        assert!(parsed.records.is_empty());
        assert!(parsed.has_rows);
    }

    #[test]
    fn extra_cells_are_ignored_and_order_is_kept() {
        let html = page(&[
            &["1", "가", "병원", "주소1", "01", "extra"],
            &["2", "나", "내과", "주소2", "02"],
            &["3", "다", "종합병원", "주소3", "03"],
        ]);
        let parsed = parse_facilities(&html, medical());
        let names: Vec<_> = parsed.records.iter().map(|r| r["기관명"].as_str()).collect();
        assert_eq!(names, ["가", "다"]);
        assert_eq!(parsed.records[0].len(), 5);
    }
}
