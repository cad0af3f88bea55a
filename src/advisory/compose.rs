//! Advisory text templates.

use crate::vision::{CloudLabel, MoistureLabel};

// ---------------------------------------------------------------------------
// Sentences
// ---------------------------------------------------------------------------

/// Soil is moist: keep fertilizer low.
pub const LOW_FERTILIZER: &str = "मिट्टी में नमी अच्छी है। उर्वरक की मात्रा कम रखें।\n";

/// Soil is dry: irrigate now, 50 litres per bigha.
pub const IRRIGATE_NOW: &str =
    "खेत सूखा है, तुरंत सिंचाई करें। 50 लीटर पानी प्रति बीघा डालें।\n";

/// Sky shows cyclone signs: secure the field.
pub const CYCLONE_WARNING: &str =
    "⚠️ चेतावनी: आसमान में चक्रवात के लक्षण दिख रहे हैं। खेत को सुरक्षित करें।\n";

/// Weather is normal: balance pesticide and fertilizer.
pub const NORMAL_WEATHER: &str = "मौसम सामान्य है, कीटनाशक और उर्वरक का संतुलन बनाएं।\n";

// ---------------------------------------------------------------------------
// compose_advisory
// ---------------------------------------------------------------------------

/// Build the advisory for one soil/sky reading.
///
/// ```rust
/// use krishi_advisor::advisory::{compose_advisory, CYCLONE_WARNING};
/// use krishi_advisor::vision::{CloudLabel, MoistureLabel};
///
/// let text = compose_advisory(MoistureLabel::Moist, CloudLabel::Cirrus);
/// assert!(text.contains(CYCLONE_WARNING));
/// assert!(text.ends_with("(Moisture: Moist (Bright Green/Blue-Green), Cloud Type: Cirrus (Thin, White Clouds))"));
/// ```
pub fn compose_advisory(moisture: MoistureLabel, cloud: CloudLabel) -> String {
    let mut advice = String::with_capacity(512);

    advice.push_str(match moisture {
        MoistureLabel::Moist => LOW_FERTILIZER,
        MoistureLabel::Dry => IRRIGATE_NOW,
    });

    advice.push_str(if cloud.is_cyclone_risk() {
        CYCLONE_WARNING
    } else {
        NORMAL_WEATHER
    });

    advice.push_str(&format!("(Moisture: {moisture}, Cloud Type: {cloud})"));
    advice
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
