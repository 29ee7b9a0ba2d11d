use mongodb::bson::{Bson, oid::ObjectId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note id: {0:?}")]
pub struct InvalidNoteId(pub String);

/// Parses a client-supplied id (24 hex chars) into a store `ObjectId`.
pub fn parse_note_id(raw: &str) -> Result<ObjectId, InvalidNoteId> {
    ObjectId::parse_str(raw).map_err(|_| InvalidNoteId(raw.to_string()))
}

pub fn note_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hex_chars() {
        let id = parse_note_id("507f1f77bcf86cd799439011").expect("valid id");
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn accepts_upper_case_hex() {
        let id = parse_note_id("507F1F77BCF86CD799439011").expect("valid id");
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "not-a-valid-id",
            "",
            "507f1f77bcf86cd79943901",
            "507f1f77bcf86cd7994390111",
            "507f1f77bcf86cd79943901z",
            " 507f1f77bcf86cd799439011",
        ] {
            assert_eq!(parse_note_id(raw), Err(InvalidNoteId(raw.to_string())));
        }
    }

    #[test]
    fn stringifies_native_and_foreign_ids() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(
            note_id_to_string(&Bson::ObjectId(oid)),
            "507f1f77bcf86cd799439011"
        );
        assert_eq!(
            note_id_to_string(&Bson::String("legacy-id".to_string())),
            "legacy-id"
        );
        assert_eq!(note_id_to_string(&Bson::Int32(7)), "7");
    }
}
