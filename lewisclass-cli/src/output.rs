/// Output formatting: plain class listing and JSON.
use lewisclass_core::Record;
use serde::Serialize;

#[derive(Serialize)]
struct JsonClass<'a> {
    class: usize,
    size: usize,
    members: &'a [Record],
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    classes: Vec<JsonClass<'a>>,
    total_records: usize,
    num_classes: usize,
}

/// Leading members of a class to show. `None` shows everyone.
fn winners(class: &[Record], num_winners: Option<usize>) -> &[Record] {
    match num_winners {
        Some(n) => &class[..n.min(class.len())],
        None => class,
    }
}

/// Render classes 1-indexed, each member indented on its own line.
pub fn render_text(classes: &[Vec<Record>], num_winners: Option<usize>) -> String {
    let mut out = String::new();
    for (i, class) in classes.iter().enumerate() {
        out.push_str(&format!("Class {}\n", i + 1));
        for entry in winners(class, num_winners) {
            out.push_str(&format!("  {entry}\n"));
        }
    }
    out
}

pub fn render_json(classes: &[Vec<Record>], num_winners: Option<usize>) -> serde_json::Result<String> {
    let output = JsonOutput {
        classes: classes
            .iter()
            .enumerate()
            .map(|(i, class)| JsonClass {
                class: i + 1,
                size: class.len(),
                members: winners(class, num_winners),
            })
            .collect(),
        total_records: classes.iter().map(Vec::len).sum(),
        num_classes: classes.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Print results as a class listing.
pub fn print_text(classes: &[Vec<Record>], num_winners: Option<usize>) {
    print!("{}", render_text(classes, num_winners));
}

/// Print results as JSON.
pub fn print_json(classes: &[Vec<Record>], num_winners: Option<usize>) {
    match render_json(classes, num_winners) {
        Ok(json) => println!("{json}"),
        Err(e) => crate::bail(format!("Failed to serialize classes: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<Record>> {
        vec![
            vec![
                Record::from_scores(&[47, 21]).with_text("Tim Brooks"),
                Record::from_scores(&[46, 6]).with_text("Bob Fleming"),
            ],
            vec![],
            vec![Record::from_scores(&[25, 0]).with_text("Aaron Carswell")],
        ]
    }

    #[test]
    fn test_render_text_all() {
        let text = render_text(&sample(), None);
        assert_eq!(
            text,
            "Class 1\n  47 21 Tim Brooks\n  46 6 Bob Fleming\nClass 2\nClass 3\n  25 0 Aaron Carswell\n"
        );
    }

    #[test]
    fn test_render_text_limits_winners() {
        let text = render_text(&sample(), Some(1));
        assert!(text.contains("Tim Brooks"));
        assert!(!text.contains("Bob Fleming"));
        assert!(text.contains("Aaron Carswell"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample(), Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["num_classes"], 3);
        assert_eq!(value["total_records"], 3);
        assert_eq!(value["classes"][0]["class"], 1);
        assert_eq!(value["classes"][0]["size"], 2);
        assert_eq!(value["classes"][0]["members"], serde_json::json!([[47, 21, "Tim Brooks"]]));
        assert_eq!(value["classes"][1]["members"], serde_json::json!([]));
    }
}
