//! Bundled demonstration datasets
//!
//! Each function builds a fresh frame on every call.

use polars::prelude::*;

/// Quinlan's 14-row "play tennis" weather data.
///
/// Columns: `Outlook`, `Temperature`, `Humidity`, `Wind` and the label `Play`.
pub fn play_tennis() -> PolarsResult<DataFrame> {
    df! {
        "Outlook" => [
            "Sunny", "Sunny", "Overcast", "Rain", "Rain", "Rain", "Overcast",
            "Sunny", "Sunny", "Rain", "Sunny", "Overcast", "Overcast", "Rain",
        ],
        "Temperature" => [
            "Hot", "Hot", "Hot", "Mild", "Cool", "Cool", "Cool",
            "Mild", "Cool", "Mild", "Mild", "Mild", "Hot", "Mild",
        ],
        "Humidity" => [
            "High", "High", "High", "High", "Normal", "Normal", "Normal",
            "High", "Normal", "Normal", "Normal", "High", "Normal", "High",
        ],
        "Wind" => [
            "Weak", "Strong", "Weak", "Weak", "Weak", "Strong", "Strong",
            "Weak", "Weak", "Weak", "Strong", "Strong", "Weak", "Strong",
        ],
        "Play" => [
            "No", "No", "Yes", "Yes", "Yes", "No", "Yes",
            "No", "Yes", "Yes", "Yes", "Yes", "Yes", "No",
        ],
    }
}

/// Label column of [`play_tennis`].
pub const PLAY_TENNIS_TARGET: &str = "Play";
