//! Built-in knowledge base dataset.

use crate::models::{DosageEntry, MedicineRecord, SymptomMapping};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn dosages(entries: &[(&str, &str)]) -> Vec<DosageEntry> {
    entries
        .iter()
        .map(|(group, dosage)| DosageEntry::new(group, dosage))
        .collect()
}

/// Medicine records in matching order.
pub(super) fn medicines() -> Vec<MedicineRecord> {
    vec![
        MedicineRecord {
            id: "paracetamol".into(),
            aliases: strings(&["paracetamol", "acetaminophen", "tylenol", "panadol", "crocin"]),
            category: "Analgesic/Antipyretic".into(),
            uses: strings(&[
                "Pain relief (mild to moderate)",
                "Fever reduction",
                "Headache relief",
                "Muscle aches",
                "Arthritis pain",
                "Cold and flu symptoms",
            ]),
            dosage: dosages(&[
                ("adult", "500-1000mg every 4-6 hours, maximum 4g daily"),
                ("child", "10-15mg/kg every 4-6 hours, maximum 60mg/kg daily"),
                ("elderly", "Reduce dose if liver/kidney problems"),
            ]),
            side_effects: strings(&[
                "Rare: liver damage with overdose",
                "Skin rash (uncommon)",
                "Nausea (rare)",
                "Blood disorders (very rare)",
            ]),
            warnings: strings(&[
                "Do not exceed recommended dose",
                "Avoid alcohol consumption",
                "Check other medications for paracetamol content",
                "Consult doctor if symptoms persist >3 days",
                "Liver disease patients: use with caution",
            ]),
            contraindications: strings(&[
                "Severe liver disease",
                "Known hypersensitivity to paracetamol",
            ]),
            interactions: strings(&[
                "Warfarin: may enhance anticoagulant effect",
                "Alcohol: increased risk of liver damage",
            ]),
        },
        MedicineRecord {
            id: "ibuprofen".into(),
            aliases: strings(&["ibuprofen", "advil", "motrin", "brufen", "nurofen"]),
            category: "NSAID (Non-Steroidal Anti-Inflammatory Drug)".into(),
            uses: strings(&[
                "Pain relief",
                "Inflammation reduction",
                "Fever reduction",
                "Arthritis",
                "Muscle strains",
                "Dental pain",
            ]),
            dosage: dosages(&[
                ("adult", "200-400mg every 4-6 hours, maximum 1.2g daily"),
                ("child", "5-10mg/kg every 6-8 hours"),
                ("elderly", "Use lowest effective dose"),
            ]),
            side_effects: strings(&[
                "Stomach upset",
                "Heartburn",
                "Dizziness",
                "Increased bleeding risk",
                "Kidney problems (long-term use)",
                "High blood pressure",
            ]),
            warnings: strings(&[
                "Take with food to reduce stomach irritation",
                "Not suitable for stomach ulcer patients",
                "Avoid if allergic to aspirin",
                "Monitor blood pressure with long-term use",
                "Increased cardiovascular risk with prolonged use",
            ]),
            contraindications: strings(&[
                "Active peptic ulcer",
                "Severe heart failure",
                "Severe kidney disease",
                "Third trimester of pregnancy",
                "Aspirin allergy",
            ]),
            interactions: strings(&[
                "Warfarin: increased bleeding risk",
                "ACE inhibitors: reduced effectiveness",
                "Lithium: increased lithium levels",
            ]),
        },
        MedicineRecord {
            id: "aspirin".into(),
            aliases: strings(&["aspirin", "acetylsalicylic acid", "bayer", "disprin"]),
            category: "NSAID/Antiplatelet".into(),
            uses: strings(&[
                "Pain relief",
                "Fever reduction",
                "Heart attack prevention",
                "Stroke prevention",
                "Blood clot prevention",
                "Anti-inflammatory",
            ]),
            dosage: dosages(&[
                ("adult_pain", "300-900mg every 4-6 hours"),
                ("adult_cardio", "75-100mg once daily"),
                ("child", "Not recommended under 16 years"),
            ]),
            side_effects: strings(&[
                "Stomach irritation",
                "Increased bleeding risk",
                "Tinnitus (ringing in ears)",
                "Nausea",
                "Allergic reactions",
            ]),
            warnings: strings(&[
                "Not for children under 16 (Reye's syndrome risk)",
                "Take with food",
                "Monitor for bleeding",
                "Stop before surgery",
                "Avoid in pregnancy (third trimester)",
            ]),
            contraindications: strings(&[
                "Children under 16 years",
                "Active bleeding",
                "Severe kidney disease",
                "Aspirin allergy",
                "Third trimester pregnancy",
            ]),
            interactions: strings(&[
                "Warfarin: major bleeding risk",
                "Methotrexate: increased toxicity",
                "Diabetes medications: enhanced effect",
            ]),
        },
        MedicineRecord {
            id: "cetirizine".into(),
            aliases: strings(&["cetirizine", "zyrtec", "reactine"]),
            category: "Antihistamine (H1 receptor antagonist)".into(),
            uses: strings(&[
                "Allergic rhinitis (hay fever)",
                "Urticaria (hives)",
                "Allergic conjunctivitis",
                "Itching",
                "Eczema symptoms",
            ]),
            dosage: dosages(&[
                ("adult", "10mg once daily"),
                ("child_6_12", "5mg once daily"),
                ("child_2_6", "2.5mg once daily"),
                ("elderly", "May need dose reduction"),
            ]),
            side_effects: strings(&["Drowsiness", "Dry mouth", "Fatigue", "Headache", "Dizziness"]),
            warnings: strings(&[
                "May cause drowsiness",
                "Avoid alcohol",
                "Reduce dose in kidney problems",
                "Use caution when driving",
            ]),
            contraindications: strings(&["Severe kidney disease", "Known hypersensitivity"]),
            interactions: strings(&[
                "Alcohol: enhanced sedation",
                "CNS depressants: additive effects",
            ]),
        },
        MedicineRecord {
            id: "omeprazole".into(),
            aliases: strings(&["omeprazole", "prilosec", "losec"]),
            category: "Proton Pump Inhibitor (PPI)".into(),
            uses: strings(&[
                "Gastroesophageal reflux disease (GERD)",
                "Peptic ulcers",
                "Heartburn",
                "Zollinger-Ellison syndrome",
                "H. pylori eradication (with antibiotics)",
            ]),
            dosage: dosages(&[
                ("adult", "20-40mg once daily before breakfast"),
                ("maintenance", "10-20mg daily"),
                ("h_pylori", "20mg twice daily with antibiotics"),
            ]),
            side_effects: strings(&[
                "Headache",
                "Stomach pain",
                "Nausea",
                "Diarrhea",
                "Vitamin B12 deficiency (long-term use)",
            ]),
            warnings: strings(&[
                "Take on empty stomach",
                "Complete prescribed course",
                "May affect vitamin B12 absorption",
                "Increased infection risk with long-term use",
                "May mask stomach cancer symptoms",
            ]),
            contraindications: strings(&["Known hypersensitivity to PPIs"]),
            interactions: strings(&[
                "Clopidogrel: reduced effectiveness",
                "Warfarin: may increase INR",
                "Digoxin: increased levels",
            ]),
        },
        MedicineRecord {
            id: "metformin".into(),
            aliases: strings(&["metformin", "glucophage", "fortamet"]),
            category: "Antidiabetic (Biguanide)".into(),
            uses: strings(&[
                "Type 2 diabetes mellitus",
                "Polycystic ovary syndrome (PCOS)",
                "Prediabetes prevention",
            ]),
            dosage: dosages(&[
                ("adult_starting", "500mg twice daily with meals"),
                ("adult_maintenance", "1000-2000mg daily in divided doses"),
                ("maximum", "2550mg daily"),
            ]),
            side_effects: strings(&[
                "Nausea",
                "Diarrhea",
                "Stomach upset",
                "Metallic taste",
                "Lactic acidosis (rare but serious)",
            ]),
            warnings: strings(&[
                "Prescription only medication",
                "Regular blood sugar monitoring required",
                "Avoid alcohol",
                "Stop before contrast procedures",
                "Monitor kidney function",
            ]),
            contraindications: strings(&[
                "Severe kidney disease",
                "Acute heart failure",
                "Severe liver disease",
                "Diabetic ketoacidosis",
                "Metabolic acidosis",
            ]),
            interactions: strings(&[
                "Alcohol: increased lactic acidosis risk",
                "Contrast agents: kidney damage risk",
                "Insulin: enhanced glucose-lowering effect",
            ]),
        },
    ]
}

/// Symptom index in matching order.
pub(super) fn symptoms() -> Vec<SymptomMapping> {
    let mapping = |label: &str, medicines: &[&str]| SymptomMapping {
        label: label.into(),
        medicines: strings(medicines),
    };

    vec![
        mapping("pain", &["paracetamol", "ibuprofen", "aspirin"]),
        mapping("headache", &["paracetamol", "ibuprofen", "aspirin"]),
        mapping("fever", &["paracetamol", "ibuprofen", "aspirin"]),
        mapping("inflammation", &["ibuprofen", "aspirin"]),
        mapping("allergy", &["cetirizine"]),
        mapping("hay fever", &["cetirizine"]),
        mapping("heartburn", &["omeprazole"]),
        mapping("acid reflux", &["omeprazole"]),
        mapping("diabetes", &["metformin"]),
        mapping("blood sugar", &["metformin"]),
    ]
}

/// Phrases that signal a possible medical emergency.
pub(super) fn emergency_keywords() -> Vec<String> {
    strings(&[
        // Self-harm and overdose
        "overdose",
        "suicide",
        "kill",
        "death",
        "emergency",
        // Cardiovascular
        "chest pain",
        "heart attack",
        "stroke",
        "bleeding",
        // Allergy and collapse
        "severe allergic reaction",
        "anaphylaxis",
        "unconscious",
        // Poisoning
        "too many pills",
        "too much medicine",
        "poisoning",
        // Respiratory
        "can't breathe",
        "difficulty breathing",
        "choking",
        // Acute symptoms
        "severe pain",
        "blood in vomit",
        "blood in stool",
        // Neurological
        "seizure",
        "convulsions",
        "loss of consciousness",
    ])
}
