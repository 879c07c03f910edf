use regex::Regex;
use chrono::NaiveDate;

// helper function to clean a sql query
pub fn clean(input : String) -> String
{
    let s = input.replace("\n", " ").replace("\t", " ");
    let r = Regex::new(r"\s{2,}").unwrap();
    r.replace_all(&s, " ").to_string()
}

// helper function to make a creation query comparable against the
// schema text sqlite stores (sqlite omits the IF NOT EXISTS clause)
pub fn comparable(input : String) -> String
{
    clean(input.replace("IF NOT EXISTS ", ""))
}

// dates live in the db as ISO-8601 text, `YYYY-MM-DD`
pub fn parse_iso_date(s : &str) -> Result<NaiveDate, chrono::ParseError>
{
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn clean_works()
    {
        let s = "Test\tstring\nfor cleaning\t".to_string();
        assert_eq!(clean(s), "Test string for cleaning ".to_string());
    }

    #[test]
    fn comparable_strips_if_not_exists()
    {
        let s = "CREATE TABLE IF NOT EXISTS t (\n    x INTEGER\n    )";
        assert_eq!(
            comparable(s.to_string()),
            "CREATE TABLE t ( x INTEGER )".to_string());
    }

    #[test]
    fn parse_iso_date_works()
    {
        let d = parse_iso_date("2024-02-29").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_iso_date("2024-2-29x").is_err());
        assert!(parse_iso_date("not a date").is_err());
    }
}
