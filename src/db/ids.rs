use chrono::Utc;
use uuid::Uuid;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Opaque row id: millisecond timestamp in base36 plus a random suffix.
/// Collision-improbable, not globally proven unique.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let random = to_base36(Uuid::new_v4().as_u128());
    format!("{}{}", to_base36(millis), &random[..10.min(random.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_non_empty_and_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_lowercase_alphanumeric() {
        let id = generate_id();
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn base36_round_trip_examples() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
