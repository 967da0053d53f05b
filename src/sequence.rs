use super::error::Error;
use super::strength::Strength;
use super::N_STREETS;

/// Parses a delimited list of small integers into typed symbols.
///
/// Accepts `"0,1,4,3"`, `"0 1 4 3"` and the bracketed `"[0, 1, 4, 3]"`
/// form found in exported player histories. Every token must be a bare
/// non-negative integer that converts into `T`; nothing is evaluated.
pub fn parse<T>(s: &str) -> Result<Vec<T>, Error>
where
    T: TryFrom<usize, Error = Error>,
{
    s.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| Error::InvalidObservation(format!("not an index: {:?}", token)))
                .and_then(T::try_from)
        })
        .collect()
}

/// Splits a multi-hand stream into hands of one observation per street.
/// A trailing partial hand is kept.
pub fn hands<T>(stream: &[T]) -> impl Iterator<Item = &[T]> {
    stream.chunks(N_STREETS)
}

/// One hand's hand strength on every street, as recorded by a simulated
/// deal. The unit of input for [`Census`](super::census::Census).
pub type Trajectory = [Strength; N_STREETS];

/// Converts a parsed row into a full trajectory.
pub fn trajectory(row: &[Strength]) -> Result<Trajectory, Error> {
    row.try_into().map_err(|_| {
        Error::InvalidObservation(format!(
            "trajectory needs {} streets, got {}",
            N_STREETS,
            row.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn parses_bracketed_lists() {
        assert_eq!(
            parse::<Action>("[0, 1, 4, 3]"),
            Ok(vec![Action::Fold, Action::Check, Action::Raise, Action::Bet])
        );
        assert_eq!(
            parse::<Strength>("4 3,2"),
            Ok(vec![Strength::VeryStrong, Strength::Strong, Strength::Medium])
        );
        assert_eq!(parse::<Action>("[]"), Ok(vec![]));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(matches!(parse::<Action>("0,5"), Err(Error::InvalidObservation(_))));
        assert!(matches!(parse::<Action>("0,-1"), Err(Error::InvalidObservation(_))));
        assert!(matches!(
            parse::<Action>("__import__('os')"),
            Err(Error::InvalidObservation(_))
        ));
    }

    #[test]
    fn splits_hands() {
        let stream = (0..10).collect::<Vec<usize>>();
        let hands = hands(&stream).map(|h| h.len()).collect::<Vec<_>>();
        assert_eq!(hands, vec![4, 4, 2]);
    }

    #[test]
    fn trajectories_need_every_street() {
        let row = parse::<Strength>("1,2,2,3").unwrap();
        assert_eq!(
            trajectory(&row),
            Ok([Strength::Weak, Strength::Medium, Strength::Medium, Strength::Strong])
        );
        assert!(trajectory(&row[..3]).is_err());
    }
}
