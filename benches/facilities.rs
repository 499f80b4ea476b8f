use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sangnok_scrape::config::boards::BOARDS;
use sangnok_scrape::specs::facilities::parse_facilities;

/// A listing page shaped like the live board: 10 rows, mixed clinic types.
fn sample_page() -> String {
    let kinds = ["소아과 의원", "내과", "보건지소", "산부인과 의원", "치과의원"];
    let mut rows = String::new();
    for i in 0..10 {
        rows.push_str(&format!(
            "<tr><td>{i}</td><td><a href=\"#\">기관 {i}</a></td><td>031-000-{i:04}</td>\
             <td>{}</td><td>경기도 안산시 상록구 {i}번길</td></tr>\n",
            kinds[i % kinds.len()]
        ));
    }
    format!(
        "<html><body><table class=\"p-table simple\"><thead><tr><th>번호</th></tr></thead>\
         <tbody>{rows}</tbody></table></body></html>"
    )
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_page();

    for board in BOARDS {
        c.bench_function(&format!("parse_{}", board.name), |b| {
            b.iter(|| {
                let page = parse_facilities(black_box(&doc), board);
                black_box(page.records.len())
            })
        });
    }
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
