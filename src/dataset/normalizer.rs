//! Record Normalizer.
//!
//! Maps one raw CSV row plus a caller-supplied category label (derived
//! from the source file name, not the row) into a canonical [`Document`].

use super::document::Document;

/// Fixed citation: the e-Gov dataset page the raw CSVs were published
/// under.
pub const SOURCE_URL: &str = "https://data.e-gov.go.jp/data/dataset/env_20140904_0456";

/// Normalize one raw row. Field positions: scientific name, Japanese
/// name, risk rank, family; missing positions become empty strings.
/// `id` is left empty for the builder to assign.
pub fn normalize(fields: &[&str], category: &str) -> Document {
    let field = |idx: usize| fields.get(idx).copied().unwrap_or("").to_string();

    let scientific_name = field(0);
    let japanese_name = field(1);
    let rank = field(2);
    let family = field(3);

    Document {
        id: String::new(),
        title: format!("{} ({})", japanese_name, scientific_name),
        content: render_content(category, &japanese_name, &scientific_name, &rank, &family),
        category: category.to_string(),
        rank: rank.clone(),
        url: SOURCE_URL.to_string(),
        scientific_name,
        japanese_name,
        family,
    }
}

fn render_content(
    category: &str,
    japanese_name: &str,
    scientific_name: &str,
    rank: &str,
    family: &str,
) -> String {
    format!(
        "分類: {}\n和名: {}\n学名: {}\n絶滅危惧ランク: {}\n科名: {}\n\nこの種は環境省のレッドリスト(第4次)において{}に分類されています。",
        category, japanese_name, scientific_name, rank, family, rank
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_title_and_content_from_full_row() {
        let doc = normalize(
            &[
                "Prionailurus bengalensis iriomotensis",
                "イリオモテヤマネコ",
                "CR",
                "ネコ科",
            ],
            "哺乳類",
        );

        assert_eq!(
            doc.title,
            "イリオモテヤマネコ (Prionailurus bengalensis iriomotensis)"
        );
        assert!(doc.content.contains("分類: 哺乳類"));
        assert!(doc.content.contains("和名: イリオモテヤマネコ"));
        assert!(doc.content.contains("学名: Prionailurus bengalensis iriomotensis"));
        assert!(doc.content.contains("絶滅危惧ランク: CR"));
        assert!(doc.content.contains("科名: ネコ科"));
        assert!(doc.content.contains("この種は環境省のレッドリスト(第4次)においてCRに分類されています。"));
        assert_eq!(doc.url, SOURCE_URL);
        assert!(doc.id.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = normalize(&["Lagopus muta japonica"], "鳥類");

        assert_eq!(doc.scientific_name, "Lagopus muta japonica");
        assert_eq!(doc.japanese_name, "");
        assert_eq!(doc.rank, "");
        assert_eq!(doc.family, "");
        assert_eq!(doc.title, " (Lagopus muta japonica)");
        assert!(doc.content.contains("絶滅危惧ランク: \n"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let doc = normalize(
            &["Ciconia boyciana", "コウノトリ", "CR", "コウノトリ科", "備考", "追加"],
            "鳥類",
        );

        assert_eq!(doc.family, "コウノトリ科");
        assert_eq!(doc.rank, "CR");
    }
}
