use serde::Deserialize;

/// Salary block of a HeadHunter vacancy
///
/// `from`/`to` may each be null; `currency` is a dictionary code
/// such as "RUR" or "USD".
#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

/// One HeadHunter vacancy record; only the salary block is of interest
#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

/// One page of the HeadHunter search response
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    pub items: Vec<HhVacancy>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub found: u64,
}

/// One SuperJob vacancy record with its flat salary fields
///
/// SuperJob encodes an unspecified bound as 0, not null.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: f64,
    #[serde(default)]
    pub payment_to: f64,
    pub currency: Option<String>,
}

impl SjVacancy {
    /// Lower bound with the zero-means-unspecified convention applied
    pub fn lower_bound(&self) -> Option<f64> {
        (self.payment_from > 0.0).then_some(self.payment_from)
    }

    /// Upper bound with the zero-means-unspecified convention applied
    pub fn upper_bound(&self) -> Option<f64> {
        (self.payment_to > 0.0).then_some(self.payment_to)
    }
}

/// One page of the SuperJob search response
#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    pub objects: Vec<SjVacancy>,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hh_page_deserializes_api_shape() {
        let page: HhPage = serde_json::from_value(json!({
            "items": [
                {"salary": {"from": 100000, "to": 150000, "currency": "RUR"}, "name": "Rust developer"},
                {"salary": null, "name": "Go developer"}
            ],
            "found": 2,
            "pages": 1,
            "page": 0,
            "per_page": 100
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.found, 2);
        let salary = page.items[0].salary.as_ref().unwrap();
        assert_eq!(salary.from, Some(100000.0));
        assert_eq!(salary.currency.as_deref(), Some("RUR"));
        assert!(page.items[1].salary.is_none());
    }

    #[test]
    fn test_sj_page_deserializes_api_shape() {
        let page: SjPage = serde_json::from_value(json!({
            "objects": [
                {"payment_from": 80000, "payment_to": 0, "currency": "rub", "profession": "Программист"}
            ],
            "more": true,
            "total": 512
        }))
        .unwrap();

        assert_eq!(page.objects.len(), 1);
        assert!(page.more);
        assert_eq!(page.total, 512);
    }

    #[test]
    fn test_sj_zero_bounds_are_unspecified() {
        let vacancy = SjVacancy {
            payment_from: 0.0,
            payment_to: 90000.0,
            currency: Some("rub".to_string()),
        };

        assert_eq!(vacancy.lower_bound(), None);
        assert_eq!(vacancy.upper_bound(), Some(90000.0));
    }
}
