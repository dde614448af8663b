//! Prints the action-type vocabulary as a JSON object of name -> token, for
//! clients that keep their own copy of the constants.

use party_video::action_types::registry;
use serde_json::{Map, Value};

fn main() -> Result<(), serde_json::Error> {
    let types: Map<String, Value> = registry()
        .map(|(name, token)| (name.to_string(), Value::from(token)))
        .collect();
    println!("{}", serde_json::to_string_pretty(&Value::Object(types))?);
    Ok(())
}
