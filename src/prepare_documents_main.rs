//! Offline document preparation: raw Red List CSVs → JSONL store.
//!
//! Reads the nine category files from `data/raw/` and writes the full
//! document set to `data/processed/redlist-documents.jsonl`.

use std::path::{Path, PathBuf};

use redlist_rag::dataset::builder::write_jsonl;
use redlist_rag::dataset::{DocumentStoreBuilder, SourceFile};
use redlist_rag::logging;

/// Raw dataset files and the category labels their rows belong to, in
/// processing order. Ids are assigned across files in this order.
const CATEGORY_FILES: [(&str, &str); 9] = [
    ("redList2012_honyurui.csv", "哺乳類"),
    ("redList2012_tyorui.csv", "鳥類"),
    ("redList2012_hachurui.csv", "爬虫類"),
    ("redList2012_ryouseirui.csv", "両生類"),
    ("redList2012_tansuigyorui.csv", "汽水・淡水魚類"),
    ("redList2012_kontyurui_2.csv", "昆虫類"),
    ("redList2012_kairui_1.csv", "貝類"),
    ("redList2012_invertebrate_1.csv", "その他無脊椎動物"),
    ("redList2012_ikansoku.csv", "維管束植物"),
];

fn main() -> anyhow::Result<()> {
    logging::init_cli();

    let input_dir = Path::new("data/raw");
    let output_file = PathBuf::from("data/processed/redlist-documents.jsonl");

    let sources: Vec<SourceFile> = CATEGORY_FILES
        .iter()
        .map(|(filename, category)| SourceFile::new(input_dir.join(filename), *category))
        .collect();

    let builder = DocumentStoreBuilder::new("shift_jis");
    let summary = builder.build(&sources);

    write_jsonl(&summary.documents, &output_file)?;

    println!("処理完了: {}件のドキュメント", summary.documents.len());
    println!("保存先: {}", output_file.display());

    println!("\nカテゴリ別件数:");
    for (category, count) in &summary.counts {
        println!("  {}: {}件", category, count);
    }

    Ok(())
}
