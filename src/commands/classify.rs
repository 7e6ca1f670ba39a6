use anyhow::Result;
use codepointe::classify;

use crate::ui::context::UiContext;
use crate::ui::views::classify::render_classification;

pub fn cmd_classify(paths: &[String], ui: UiContext) -> Result<()> {
    for path in paths {
        // Backslashes from Windows shells classify like forward slashes
        let normalized = path.replace('\\', "/");
        let classification = classify(&normalized);

        if ui.json {
            let mut value = serde_json::to_value(&classification)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("path".to_string(), serde_json::json!(normalized));
            }
            println!("{}", serde_json::to_string(&value)?);
        } else {
            print!("{}", render_classification(&normalized, &classification, &ui));
        }
    }
    Ok(())
}
