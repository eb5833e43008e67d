//! Contacts sheet → [`Contact`] list.

use campinfo_shared::Contact;
use tracing::debug;

use crate::records::{Record, case_variants};

/// Extract contacts, keeping only rows with a name. Input order is preserved.
pub fn to_contacts(records: &[Record]) -> Vec<Contact> {
    let [name, role, phone, email] = ["Name", "Role", "Phone", "Email"].map(case_variants);

    let contacts: Vec<Contact> = records
        .iter()
        .map(|r| Contact {
            name: r.probe(&name),
            role: r.probe(&role),
            phone: r.probe(&phone),
            email: r.probe(&email),
        })
        .filter(|c| !c.name.is_empty())
        .collect();

    debug!(
        records = records.len(),
        contacts = contacts.len(),
        "contacts extracted"
    );

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    #[test]
    fn maps_all_fields() {
        let records = vec![rec(&[
            ("Name", "Camp Office"),
            ("Role", "Main Line"),
            ("Phone", "+1-540-555-0123"),
            ("Email", "office@example.org"),
        ])];
        assert_eq!(
            to_contacts(&records),
            vec![Contact {
                name: "Camp Office".into(),
                role: "Main Line".into(),
                phone: "+1-540-555-0123".into(),
                email: "office@example.org".into(),
            }]
        );
    }

    #[test]
    fn row_without_name_is_dropped() {
        let records = vec![
            rec(&[("Role", "Nurse"), ("Phone", "555"), ("Email", "n@example.org")]),
            rec(&[("Name", "  "), ("Role", "Ranger")]),
            rec(&[("NAME", "Director")]),
        ];
        let contacts = to_contacts(&records);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Director");
        assert_eq!(contacts[0].role, "");
        assert_eq!(contacts[0].phone, "");
        assert_eq!(contacts[0].email, "");
    }

    #[test]
    fn each_field_resolves_independently() {
        let records = vec![rec(&[
            ("name", " Ann "),
            ("ROLE", "Health Officer"),
            ("Phone", ""),
            ("phone", "555-0100"),
            ("EMAIL", "ann@example.org"),
        ])];
        let c = &to_contacts(&records)[0];
        assert_eq!(c.name, "Ann");
        assert_eq!(c.role, "Health Officer");
        assert_eq!(c.phone, "555-0100");
        assert_eq!(c.email, "ann@example.org");
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            rec(&[("Name", "B")]),
            rec(&[("Name", "")]),
            rec(&[("Name", "A")]),
        ];
        let names: Vec<String> = to_contacts(&records).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(to_contacts(&[]).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let records = vec![rec(&[("Name", "Ann")]), rec(&[("Email", "x@example.org")])];
        assert_eq!(to_contacts(&records), to_contacts(&records));
    }
}
