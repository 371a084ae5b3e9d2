use anyhow::{bail, Context, Result};
use hull2d::{Hull2, HullError, Point};
use serde::Serialize;

/// JSON document printed by every command.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub seed: Option<u64>,
    pub hulls: Vec<HullReport>,
    /// `None` unless both hulls computed.
    pub intersect: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub points: usize,
    pub computed: bool,
    pub error: Option<String>,
    pub boundary: Vec<[f32; 2]>,
}

impl HullReport {
    pub fn new(hull: &Hull2, outcome: Result<(), HullError>) -> Self {
        let computed = outcome.is_ok() && !hull.is_dirty();
        Self {
            points: hull.points().len(),
            computed,
            error: outcome.err().map(|e| e.to_string()),
            boundary: if computed {
                hull.boundary_points().map(|p| [p.x, p.y]).collect()
            } else {
                Vec::new()
            },
        }
    }
}

pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse `"x,y x,y ..."` (whitespace or `;` separated pairs). Whitespace
/// around the comma inside a pair is allowed.
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    let joined = s.split(',').map(str::trim).collect::<Vec<_>>().join(",");
    let mut out = Vec::new();
    for tok in joined.split(|c: char| c.is_whitespace() || c == ';') {
        if tok.is_empty() {
            continue;
        }
        let Some((x, y)) = tok.split_once(',') else {
            bail!("expected x,y but got {tok:?}");
        };
        let x: f32 = x.trim().parse().with_context(|| format!("bad x in {tok:?}"))?;
        let y: f32 = y.trim().parse().with_context(|| format!("bad y in {tok:?}"))?;
        if !x.is_finite() || !y.is_finite() {
            bail!("non-finite coordinate in {tok:?}");
        }
        out.push(Point::new(x, y));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::BoundedStack;
    use serde_json::Value;

    #[test]
    fn parse_points_accepts_spaces_and_semicolons() {
        let pts = parse_points("0,0 2,0;2, 2\t0,2").unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0)
            ]
        );
        assert!(parse_points("").unwrap().is_empty());
        assert_eq!(
            parse_points(" 1 ,  -3\n4 ,5 ").unwrap(),
            vec![Point::new(1.0, -3.0), Point::new(4.0, 5.0)]
        );
    }

    #[test]
    fn parse_points_rejects_garbage() {
        assert!(parse_points("1,2 3").is_err());
        assert!(parse_points("a,1").is_err());
        assert!(parse_points("inf,1").is_err());
    }

    #[test]
    fn hull_report_serializes_boundary_or_error() {
        let mut scratch = BoundedStack::with_capacity(16).unwrap();
        let mut ok = Hull2::new();
        ok.add_points(&parse_points("0,0 1,0 0,1").unwrap()).unwrap();
        let r = ok.compute_hull(&mut scratch);
        let rep = HullReport::new(&ok, r);
        let v: Value = serde_json::to_value(&rep).unwrap();
        assert_eq!(v["computed"], true);
        assert_eq!(v["points"], 3);
        assert!(v["error"].is_null());
        assert_eq!(v["boundary"].as_array().unwrap().len(), 3);
        assert_eq!(v["boundary"][0][0], 1.0);

        let mut bad = Hull2::new();
        bad.add_points(&parse_points("0,0 1,1").unwrap()).unwrap();
        let r = bad.compute_hull(&mut scratch);
        let rep = HullReport::new(&bad, r);
        let v: Value = serde_json::to_value(&rep).unwrap();
        assert_eq!(v["computed"], false);
        assert!(v["error"].as_str().unwrap().contains("at least 3"));
        assert!(v["boundary"].as_array().unwrap().is_empty());
    }
}
