// src/config/boards.rs
use std::ops::RangeInclusive;

/// Where a row's facility type comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSource {
    /// Value of this schema field in the parsed row.
    Field(&'static str),
    /// Same value for every row of the board.
    Constant(&'static str),
    None,
}

/// Static description of one bulletin board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub name: &'static str,
    /// Query parameters sent with every page request, in declaration order.
    pub params: &'static [(&'static str, &'static str)],
    pub pages: RangeInclusive<u32>,
    /// Column schema. Maps `td` 1..=N; column 0 is the row index and is skipped.
    pub fields: &'static [&'static str],
    /// Output file name (no directory).
    pub output: &'static str,
    pub type_source: TypeSource,
    /// `None` accepts every type.
    pub allowed_types: Option<&'static [&'static str]>,
}

impl BoardConfig {
    /// Minimum number of `td` cells a data row must have.
    pub fn min_cells(&self) -> usize {
        self.fields.len() + 1
    }
}

/// All boards, in the order they are crawled and written.
pub static BOARDS: &[BoardConfig] = &[
    BoardConfig {
        name: "medical_facilities",
        params: &[
            ("key", "1539"),
            ("bbs_code", "B0170"),
            ("bbs_seq", ""),
            ("sch_type", "sj"),
            ("sch_text", ""),
        ],
        pages: 1..=3,
        fields: &["기관명", "기관종명", "주소", "전화번호"],
        output: "medical_facilities.json",
        type_source: TypeSource::Field("기관종명"),
        allowed_types: Some(&["병원", "종합병원"]),
    },
    BoardConfig {
        name: "pharmacies",
        params: &[
            ("key", "1540"),
            ("bbs_code", "B0171"),
            ("bbs_seq", ""),
            ("sch_type", "sj"),
            ("sch_text", ""),
        ],
        pages: 1..=12,
        fields: &["기관명", "전화번호", "관리기관", "주소"],
        output: "pharmacies.json",
        type_source: TypeSource::Constant("일반약국"),
        allowed_types: None,
    },
    BoardConfig {
        name: "clinics",
        params: &[
            ("key", "1541"),
            ("bbs_code", "B0172"),
            ("bbs_seq", ""),
            ("sch_type", "sj"),
            ("sch_text", ""),
        ],
        pages: 1..=28,
        fields: &["기관명", "전화번호", "종별", "주소"],
        output: "clinics.json",
        type_source: TypeSource::Field("종별"),
        allowed_types: Some(&["보건지소", "여성의원", "보건소", "소아과 의원", "산부인과 의원"]),
    },
];
