use crate::error::Result;
use crate::sample::Row;
use super::question::Question;


/// Splits `rows` into the rows that match `question`
/// and the rows that do not.
/// Both outputs keep the input order.
pub fn partition<'a>(rows: &[&'a Row], question: &Question)
    -> Result<(Vec<&'a Row>, Vec<&'a Row>)>
{
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for &row in rows {
        if question.matches(row)? {
            matched.push(row);
        } else {
            unmatched.push(row);
        }
    }
    Ok((matched, unmatched))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_partition_keeps_order() {
        let rows = vec![
            row!["Green",  3, "Apple"],
            row!["Red",    1, "Grape"],
            row!["Yellow", 3, "Lemon"],
            row!["Red",    2, "Grape"],
        ];
        let refs = rows.iter().collect::<Vec<_>>();

        let (t, f) = partition(&refs, &Question::new(0, "Red")).unwrap();
        assert_eq!(t, vec![&rows[1], &rows[3]]);
        assert_eq!(f, vec![&rows[0], &rows[2]]);
    }

    #[test]
    fn test_partition_propagates_errors() {
        let rows = vec![row!["Green", 3, "Apple"]];
        let refs = rows.iter().collect::<Vec<_>>();
        assert!(partition(&refs, &Question::new(7, 1)).is_err());
    }
}
