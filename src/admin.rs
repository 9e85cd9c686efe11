//! Pure filter/sort helpers behind the admin listing endpoint.
//!
//! The admin panel keeps a local snapshot of the order list and re-filters
//! and re-sorts it whenever the search term or sort direction changes; these
//! functions are the server-side counterpart, with no hidden state.

use serde::Deserialize;

use crate::models::orders;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Keep orders whose id, full name or email contains the term
/// case-insensitively, or whose phone number contains it verbatim (phone
/// numbers are plain digits, so no case folding there).
pub fn filter_orders(all_orders: Vec<orders::Model>, term: &str) -> Vec<orders::Model> {
    let needle = term.to_lowercase();
    all_orders
        .into_iter()
        .filter(|order| {
            order.id.to_lowercase().contains(&needle)
                || order.nombre_completo.to_lowercase().contains(&needle)
                || order.correo_electronico.to_lowercase().contains(&needle)
                || order.numero_telefono.contains(term)
        })
        .collect()
}

/// Sort by creation timestamp. Stable, so equal timestamps keep their
/// incoming order.
pub fn sort_orders(all_orders: &mut [orders::Model], direction: SortDirection) {
    match direction {
        SortDirection::Asc => all_orders.sort_by_key(|order| order.fecha_creacion),
        SortDirection::Desc => {
            all_orders.sort_by(|a, b| b.fecha_creacion.cmp(&a.fecha_creacion))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::orders::Estado;
    use chrono::{Duration, Utc};

    fn order(id: &str, nombre: &str, email: &str, telefono: &str, age_mins: i64) -> orders::Model {
        let created = Utc::now() - Duration::minutes(age_mins);
        orders::Model {
            id: id.to_string(),
            nombre_completo: nombre.to_string(),
            nombre_penya: None,
            direccion: "Calle Mayor 1".to_string(),
            correo_electronico: email.to_string(),
            numero_telefono: telefono.to_string(),
            segundo_numero_telefono: None,
            estado: Estado::Pendiente,
            total_estimado: None,
            comentarios: None,
            fecha_creacion: created,
            fecha_actualizacion: created,
        }
    }

    fn sample() -> Vec<orders::Model> {
        vec![
            order("aaa111", "Ana López", "ana@x.com", "600111222", 30),
            order("bbb222", "Bernat Ferrer", "bernat@y.es", "699888777", 20),
            order("ccc333", "Carmen Gil", "carmen@z.org", "612345678", 10),
        ]
    }

    #[test]
    fn filters_by_email_substring() {
        let hits = filter_orders(sample(), "bernat@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "bbb222");
    }

    #[test]
    fn filters_by_name_case_insensitively() {
        let hits = filter_orders(sample(), "ana lóp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nombre_completo, "Ana López");
    }

    #[test]
    fn filters_by_phone_substring() {
        let hits = filter_orders(sample(), "12345");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "ccc333");
    }

    #[test]
    fn unmatched_term_returns_empty() {
        assert!(filter_orders(sample(), "zzzz-no-match").is_empty());
    }

    #[test]
    fn sort_desc_reverses_asc_exactly() {
        let mut asc = sample();
        sort_orders(&mut asc, SortDirection::Asc);
        let mut desc = asc.clone();
        sort_orders(&mut desc, SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn sort_asc_is_oldest_first() {
        let mut all_orders = sample();
        sort_orders(&mut all_orders, SortDirection::Asc);
        assert_eq!(all_orders[0].id, "aaa111");
        assert_eq!(all_orders[2].id, "ccc333");
    }
}
