use serde::{Deserialize, Serialize};

/// Person-in-charge roster for one main project.
///
/// Role keys follow the company's short codes: architect, interior
/// designer, drafter, project manager and site supervisor (pengawas).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PicAssignments {
    pub arch: String,
    pub intr: String,
    pub drft: String,
    pub pm: String,
    pub pgws: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_role_codes() {
        let pic = PicAssignments {
            arch: "Malazi".into(),
            intr: "Aviva".into(),
            drft: "Aldi".into(),
            pm: "Pak Dar".into(),
            pgws: "Ujang".into(),
        };
        let value = serde_json::to_value(&pic).unwrap();
        assert_eq!(value["ARCH"], "Malazi");
        assert_eq!(value["PGWS"], "Ujang");
    }
}
