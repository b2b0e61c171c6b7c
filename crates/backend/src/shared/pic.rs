use contracts::shared::pic::PicAssignments;
use maplit::hashmap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Person-in-charge roster, keyed by upper-cased main project name.
/// Static company data, loaded once and never mutated.
static PIC_MAP: Lazy<HashMap<&'static str, PicAssignments>> = Lazy::new(|| {
    hashmap! {
        "SENTUL RAQUET CLUB" => PicAssignments {
            arch: "Malazi".into(),
            intr: "Aviva".into(),
            drft: "Aldi".into(),
            pm: "Pak Dar".into(),
            pgws: "Ujang".into(),
        },
        "PROJECT LAIN" => PicAssignments {
            arch: "Budi".into(),
            intr: "Sinta".into(),
            drft: "Rizal".into(),
            pm: "Andi".into(),
            pgws: "Tono".into(),
        },
    }
});

/// Case-insensitive lookup by main project name
pub fn lookup(project_name: &str) -> Option<&'static PicAssignments> {
    PIC_MAP.get(project_name.to_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let pic = lookup("Sentul Raquet Club").expect("known project");
        assert_eq!(pic.arch, "Malazi");
        assert_eq!(pic.pm, "Pak Dar");
    }

    #[test]
    fn test_unknown_project_has_no_pic() {
        assert!(lookup("Nonexistent Tower").is_none());
    }
}
