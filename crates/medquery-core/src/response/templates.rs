//! Fixed response texts.

/// Disclaimer attached to every non-error response.
pub const STANDARD_DISCLAIMER: &str = "⚠️ MEDICAL DISCLAIMER: This information is for educational \
purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. \
Always seek the advice of your physician or other qualified health provider with any questions \
you may have regarding a medical condition. Never disregard professional medical advice or delay \
in seeking it because of something you have read here.";

/// Emergency guidance shown whenever a safety flag is raised.
pub const EMERGENCY_TEXT: &str = r#"🚨 MEDICAL EMERGENCY DETECTED 🚨

If you are experiencing a medical emergency, please:
1. Call emergency services immediately (911 in US, 999 in UK, 112 in EU)
2. Contact your local poison control center if this involves overdose
3. Seek immediate medical attention at the nearest hospital

This AI assistant cannot provide emergency medical care. Please contact healthcare professionals immediately."#;

/// Capability overview for queries with nothing recognizable in them.
pub const GENERAL_TEXT: &str = r#"I can help you with information about common medicines and their uses. I have detailed information about:

• **Pain Relief:** Paracetamol, Ibuprofen, Aspirin
• **Allergies:** Cetirizine
• **Acid Reflux:** Omeprazole
• **Diabetes:** Metformin

You can ask me about:
- Uses and indications
- Dosage information
- Side effects
- Warnings and precautions
- Drug interactions

What specific information would you like to know?"#;

/// Advice appended to every symptom-based answer.
pub const GENERAL_ADVICE: [&str; 4] = [
    "Start with the lowest effective dose",
    "Read all package instructions carefully",
    "Consult a pharmacist or doctor if symptoms persist",
    "Seek medical attention if symptoms worsen",
];

pub const EMERGENCY_WARNING: &str = "SEEK IMMEDIATE MEDICAL ATTENTION";
pub const SYMPTOM_WARNING: &str = "Consult healthcare provider if symptoms persist or worsen";
pub const UNKNOWN_MEDICINE_WARNING: &str = "Consult healthcare professional for unknown medications";

pub const DOSAGE_NOTE: &str = "⚠️ Always follow your doctor's instructions or package directions.";
pub const SIDE_EFFECTS_NOTE: &str =
    "⚠️ Contact your healthcare provider if you experience severe side effects.";

/// Text for a medicine id the knowledge base has no record of.
pub fn unknown_medicine_text(medicine: &str, known: &[&str]) -> String {
    format!(
        r#"I don't have specific information about "{}" in my current database.

For accurate information about this medication, I recommend:
• Consulting your pharmacist
• Checking the medication package insert
• Speaking with your healthcare provider
• Using official medical databases like drugs.com or WebMD

I can provide information about these common medicines:
{}"#,
        medicine,
        known.join(", ")
    )
}
