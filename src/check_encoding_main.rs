//! Encoding diagnostic: report the detected encoding of a raw CSV file
//! and preview its first lines. Not part of the runtime request path.

use std::env;
use std::fs;

use redlist_rag::dataset::encoding;

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/raw/redList2012_honyurui.csv".to_string());

    let bytes = fs::read(&path)?;

    let detection = encoding::detect(&bytes);
    println!("検出されたエンコーディング: {}", detection.encoding);
    println!("信頼度: {}", detection.confidence);

    let text = encoding::decode(&bytes, &detection.encoding)?;
    println!("\n最初の5行:");
    for line in text.lines().take(5) {
        println!("{}", line);
    }

    Ok(())
}
