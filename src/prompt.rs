use serde_json::{json, Value};

/// Response schema the model is asked to conform to: an array of objects
/// with required string fields `name`, `type` and `description`.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "The name of the column." },
                "type": { "type": "STRING", "description": "The guessed data type (e.g., String, Integer, Float, Date)." },
                "description": { "type": "STRING", "description": "A plain-English description of what the column represents." },
            },
            "required": ["name", "type", "description"],
        },
    })
}

/// Builds the instruction for the model. Column names are embedded verbatim,
/// in order, with no sanitization.
pub fn build_prompt(columns: &[String]) -> String {
    let column_list = columns.join(", ");
    format!(
        "You are a professional data analyst. Your task is to create a data dictionary.\n\
         \n\
         Based on this list of column names from a CSV file:\n\
         {column_list}\n\
         \n\
         Please generate a plain-English 'description' and a 'data type' guess for each column.\n\
         Return the result ONLY as a clean JSON array that adheres to the provided schema. \
         Do not include any text before or after the JSON array."
    )
}
