use crate::models::Registration;

/// A normalized identity for a registration, used to detect duplicate
/// submissions of the same contestant line-up for the same event.
///
/// Two registrations are duplicates when they name the same event
/// (case-insensitive) and the same multiset of contestant d_no values
/// (case-insensitive, order-independent). Contestant *names* do not
/// participate: the d_no is the department-issued identity, and name
/// casing or spelling drift between double-submissions must not break
/// duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationSignature {
    event: String,
    d_nos: Vec<String>,
}

impl RegistrationSignature {
    /// Creates a signature from an event name and contestant d_no values.
    /// Both are lowercased and the d_nos sorted, so input order and casing
    /// never affect equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::RegistrationSignature;
    ///
    /// let a = RegistrationSignature::new("Quiz", ["D1", "D2"]);
    /// let b = RegistrationSignature::new("quiz", ["d2", "d1"]);
    ///
    /// assert_eq!(a, b);
    /// ```
    pub fn new<I, S>(event_name: &str, d_nos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut d_nos: Vec<String> = d_nos
            .into_iter()
            .map(|d| d.as_ref().to_lowercase())
            .collect();
        d_nos.sort();

        Self {
            event: event_name.to_lowercase(),
            d_nos,
        }
    }

    pub fn of(registration: &Registration) -> Self {
        Self::new(
            &registration.event_name,
            registration.contestants.0.iter().map(|c| c.d_no.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_same_order() {
        let a = RegistrationSignature::new("Quiz", ["D1", "D2"]);
        let b = RegistrationSignature::new("Quiz", ["D1", "D2"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_reversed_order() {
        let a = RegistrationSignature::new("Quiz", ["D1", "D2"]);
        let b = RegistrationSignature::new("Quiz", ["D2", "D1"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_case_insensitive() {
        let a = RegistrationSignature::new("QUIZ", ["d1", "D2"]);
        let b = RegistrationSignature::new("quiz", ["D1", "d2"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_events_differ() {
        let a = RegistrationSignature::new("Quiz", ["D1"]);
        let b = RegistrationSignature::new("Dance", ["D1"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_d_no_sets_differ() {
        let a = RegistrationSignature::new("Quiz", ["D1", "D2"]);
        let b = RegistrationSignature::new("Quiz", ["D1", "D3"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_repeated_d_no_is_not_collapsed() {
        let a = RegistrationSignature::new("Quiz", ["D1", "D1"]);
        let b = RegistrationSignature::new("Quiz", ["D1"]);
        assert_ne!(a, b);
    }
}
