use crate::BoxError;
use std::fs::File;
use std::io::Write;

pub fn save_json(data: &serde_json::Value, filename: &str) -> Result<(), BoxError> {
    let mut file = File::create(filename)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    println!("✅ Wrote {}.", filename);
    Ok(())
}

pub fn save_text(content: &str, filename: &str) -> Result<(), BoxError> {
    let mut file = File::create(filename)?;
    file.write_all(content.as_bytes())?;
    println!("✅ Wrote {}.", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_text_round_trips() {
        let path = std::env::temp_dir().join("copyfix_save_text_test.txt");
        let path = path.to_str().unwrap();
        save_text("Headline: Build Better", path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Headline: Build Better");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn save_json_writes_pretty_json() {
        let path = std::env::temp_dir().join("copyfix_save_json_test.json");
        let path = path.to_str().unwrap();
        save_json(&json!({ "mistakes": ["a", "b"] }), path).unwrap();
        let back: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back["mistakes"][1], "b");
        let _ = std::fs::remove_file(path);
    }
}
