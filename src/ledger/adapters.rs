//! Fetch ledger data and reshape it into the canonical records.
//!
//! Each adapter issues exactly one GET request and applies one pure
//! transform. Failures are logged with a message naming the data that could
//! not be loaded and then returned unchanged; retrying is up to the caller.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    endpoints::backend,
    error::LedgerError,
    ledger::records::{
        CategoryShare, ExpenseBarPoint, ExpenseRecord, IncomeBarPoint, IncomeRecord, LedgerEntry,
        TimeSeriesPoint,
    },
    services::{LedgerService, Session},
};

/// The adapters bound to one backend and one browser session.
pub struct LedgerAdapters<'a> {
    service: &'a dyn LedgerService,
    session: &'a Session,
}

impl<'a> LedgerAdapters<'a> {
    pub fn new(service: &'a dyn LedgerService, session: &'a Session) -> Self {
        Self { service, session }
    }

    pub async fn income_list(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        self.fetch(
            backend::INCOME_LIST,
            "Income list could not be retrieved",
            to_income_entries,
        )
        .await
    }

    pub async fn expense_list(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        self.fetch(
            backend::EXPENSE_LIST,
            "Expense list could not be retrieved",
            to_expense_entries,
        )
        .await
    }

    pub async fn monthly_totals(&self) -> Result<Vec<TimeSeriesPoint>, LedgerError> {
        self.fetch(
            backend::MONTHLY_TOTALS,
            "Monthly totals could not be retrieved",
            to_monthly_totals,
        )
        .await
    }

    pub async fn monthly_income(&self) -> Result<Vec<IncomeBarPoint>, LedgerError> {
        self.fetch(
            backend::MONTHLY_INCOME,
            "Monthly income totals could not be retrieved",
            to_monthly_income_bars,
        )
        .await
    }

    pub async fn monthly_expense(&self) -> Result<Vec<ExpenseBarPoint>, LedgerError> {
        self.fetch(
            backend::MONTHLY_EXPENSE,
            "Monthly expense totals could not be retrieved",
            to_monthly_expense_bars,
        )
        .await
    }

    pub async fn category_shares(&self) -> Result<Vec<CategoryShare>, LedgerError> {
        self.fetch(
            backend::CATEGORY_SHARES,
            "Expense sums by category could not be retrieved",
            to_category_shares,
        )
        .await
    }

    async fn fetch<T>(
        &self,
        path: &str,
        failure_message: &str,
        transform: fn(Value) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let body = self
            .service
            .get(path, self.session)
            .await
            .inspect_err(|error| tracing::error!("{failure_message}: {error}"))?;

        transform(body).inspect_err(|error| tracing::error!("{failure_message}: {error}"))
    }
}

pub fn to_income_entries(body: Value) -> Result<Vec<LedgerEntry>, LedgerError> {
    let records: Vec<IncomeRecord> = serde_json::from_value(body)?;

    Ok(records.into_iter().map(LedgerEntry::from).collect())
}

pub fn to_expense_entries(body: Value) -> Result<Vec<LedgerEntry>, LedgerError> {
    let records: Vec<ExpenseRecord> = serde_json::from_value(body)?;

    Ok(records.into_iter().map(LedgerEntry::from).collect())
}

pub fn to_monthly_totals(body: Value) -> Result<Vec<TimeSeriesPoint>, LedgerError> {
    let entries = map_entries::<f64>(body)?;

    Ok(entries
        .into_iter()
        .map(|(x, l)| TimeSeriesPoint { x, l })
        .collect())
}

/// Missing months (`null`) are drawn as zero.
pub fn to_monthly_income_bars(body: Value) -> Result<Vec<IncomeBarPoint>, LedgerError> {
    let entries = map_entries::<Option<f64>>(body)?;

    Ok(entries
        .into_iter()
        .map(|(x, v)| IncomeBarPoint {
            x,
            v: v.unwrap_or(0.0),
        })
        .collect())
}

/// Missing months (`null`) are drawn as zero.
pub fn to_monthly_expense_bars(body: Value) -> Result<Vec<ExpenseBarPoint>, LedgerError> {
    let entries = map_entries::<Option<f64>>(body)?;

    Ok(entries
        .into_iter()
        .map(|(x, v1)| ExpenseBarPoint {
            x,
            v1: v1.unwrap_or(0.0),
        })
        .collect())
}

pub fn to_category_shares(body: Value) -> Result<Vec<CategoryShare>, LedgerError> {
    let entries = map_entries::<f64>(body)?;

    Ok(entries
        .into_iter()
        .map(|(key, value)| CategoryShare::from_key(&key, value))
        .collect())
}

/// Flatten a JSON object into its entries, in the order the backend sent them.
fn map_entries<T: DeserializeOwned>(body: Value) -> Result<Vec<(String, T)>, LedgerError> {
    let map: serde_json::Map<String, Value> = serde_json::from_value(body)?;

    map.into_iter()
        .map(|(key, value)| Ok((key, serde_json::from_value(value)?)))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use crate::{
        endpoints::backend,
        error::LedgerError,
        ledger::records::{
            CategoryShare, EntryKind, ExpenseBarPoint, IncomeBarPoint, LedgerEntry,
            TimeSeriesPoint,
        },
        services::{LedgerService, Session},
    };

    use super::{
        LedgerAdapters, to_category_shares, to_monthly_expense_bars, to_monthly_income_bars,
        to_monthly_totals,
    };

    /// A ledger backend that serves fixed JSON bodies and records requested paths.
    #[derive(Default)]
    pub(crate) struct StubLedgerService {
        responses: HashMap<&'static str, Result<Value, LedgerError>>,
        pub(crate) requested_paths: Mutex<Vec<String>>,
    }

    impl StubLedgerService {
        pub(crate) fn with(mut self, path: &'static str, body: Value) -> Self {
            self.responses.insert(path, Ok(body));
            self
        }

        pub(crate) fn failing(mut self, path: &'static str, error: LedgerError) -> Self {
            self.responses.insert(path, Err(error));
            self
        }

        /// A backend with a small, consistent data set on every path.
        pub(crate) fn populated() -> Self {
            Self::default()
                .with(
                    backend::INCOME_LIST,
                    json!([{
                        "incomeAmount": 3000,
                        "incomeDate": "2023-01-25",
                        "categoryIncomeName": "Salary",
                        "incomeContent": "January pay",
                    }]),
                )
                .with(
                    backend::EXPENSE_LIST,
                    json!([{
                        "expenseAmount": 42.5,
                        "expenseDate": "2023-01-03",
                        "categoryName": "Food",
                        "expenseContent": "Groceries",
                    }]),
                )
                .with(
                    backend::MONTHLY_TOTALS,
                    json!({"2023-01": 100, "2023-02": 200}),
                )
                .with(
                    backend::MONTHLY_INCOME,
                    json!({"2023-01": 3000, "2023-02": null}),
                )
                .with(
                    backend::MONTHLY_EXPENSE,
                    json!({"2023-01": null, "2023-02": 42.5}),
                )
                .with(
                    backend::CATEGORY_SHARES,
                    json!({"Food_12": 500, "Transport_3": 120}),
                )
        }
    }

    #[async_trait]
    impl LedgerService for StubLedgerService {
        async fn get(&self, path: &str, _: &Session) -> Result<Value, LedgerError> {
            self.requested_paths.lock().unwrap().push(path.to_owned());

            self.responses
                .get(path)
                .cloned()
                .unwrap_or(Err(LedgerError::Status(404)))
        }
    }

    #[test]
    fn monthly_totals_preserve_backend_order() {
        let body = json!({"2023-02": 200, "2023-01": 100});

        let points = to_monthly_totals(body).unwrap();

        assert_eq!(
            points,
            vec![
                TimeSeriesPoint {
                    x: "2023-02".to_owned(),
                    l: 200.0
                },
                TimeSeriesPoint {
                    x: "2023-01".to_owned(),
                    l: 100.0
                },
            ]
        );
    }

    #[test]
    fn monthly_totals_serialize_with_chart_field_names() {
        let points = to_monthly_totals(json!({"2023-01": 100, "2023-02": 200})).unwrap();

        assert_eq!(
            serde_json::to_value(points).unwrap(),
            json!([{"x": "2023-01", "l": 100.0}, {"x": "2023-02", "l": 200.0}])
        );
    }

    #[test]
    fn monthly_totals_reject_null() {
        let result = to_monthly_totals(json!({"2023-01": null}));

        assert!(matches!(result, Err(LedgerError::Parse(_))));
    }

    #[test]
    fn monthly_income_coerces_null_to_zero() {
        let bars = to_monthly_income_bars(json!({"2023-01": null})).unwrap();

        assert_eq!(
            bars,
            vec![IncomeBarPoint {
                x: "2023-01".to_owned(),
                v: 0.0
            }]
        );
        assert_eq!(
            serde_json::to_value(bars).unwrap(),
            json!([{"x": "2023-01", "v": 0.0}])
        );
    }

    #[test]
    fn monthly_expense_uses_v1() {
        let bars = to_monthly_expense_bars(json!({"2023-01": 7, "2023-02": null})).unwrap();

        assert_eq!(
            bars,
            vec![
                ExpenseBarPoint {
                    x: "2023-01".to_owned(),
                    v1: 7.0
                },
                ExpenseBarPoint {
                    x: "2023-02".to_owned(),
                    v1: 0.0
                },
            ]
        );
        assert_eq!(
            serde_json::to_value(&bars[0]).unwrap(),
            json!({"x": "2023-01", "v1": 7.0})
        );
    }

    #[test]
    fn category_shares_use_category_name_for_label_and_id() {
        let shares = to_category_shares(json!({"Food_12": 500})).unwrap();

        assert_eq!(
            shares,
            vec![CategoryShare {
                id: "Food".to_owned(),
                label: "Food".to_owned(),
                category: "Food".to_owned(),
                value: 500.0,
            }]
        );
    }

    #[test]
    fn non_object_body_is_a_parse_error() {
        let result = to_category_shares(json!([1, 2, 3]));

        assert!(matches!(result, Err(LedgerError::Parse(_))));
    }

    #[tokio::test]
    async fn each_adapter_requests_its_own_path_once() {
        let service = StubLedgerService::populated();
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        adapters.income_list().await.unwrap();
        adapters.expense_list().await.unwrap();
        adapters.monthly_totals().await.unwrap();
        adapters.monthly_income().await.unwrap();
        adapters.monthly_expense().await.unwrap();
        adapters.category_shares().await.unwrap();

        assert_eq!(
            *service.requested_paths.lock().unwrap(),
            vec![
                backend::INCOME_LIST,
                backend::EXPENSE_LIST,
                backend::MONTHLY_TOTALS,
                backend::MONTHLY_INCOME,
                backend::MONTHLY_EXPENSE,
                backend::CATEGORY_SHARES,
            ]
        );
    }

    #[tokio::test]
    async fn list_adapters_tag_entry_kind() {
        let service = StubLedgerService::populated();
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        let income = adapters.income_list().await.unwrap();
        let expense = adapters.expense_list().await.unwrap();

        assert_eq!(
            income,
            vec![LedgerEntry {
                amount: 3000.0,
                date: "2023-01-25".to_owned(),
                category: "Salary".to_owned(),
                detail: "January pay".to_owned(),
                kind: EntryKind::Income,
            }]
        );
        assert_eq!(expense[0].kind, EntryKind::Expense);
        assert_eq!(expense[0].category, "Food");
    }

    #[tokio::test]
    async fn expense_list_keeps_records_with_null_fields() {
        let service = StubLedgerService::default().with(
            backend::EXPENSE_LIST,
            json!([
                {
                    "expenseAmount": 12.5,
                    "expenseDate": "2023-01-03",
                    "categoryName": null,
                    "expenseContent": "Lunch",
                },
                {
                    "expenseAmount": null,
                    "expenseDate": "2023-01-04",
                    "categoryName": "Food",
                },
                {
                    "expenseAmount": 42.5,
                    "expenseDate": "2023-01-05",
                    "categoryName": "Transport",
                    "expenseContent": "Bus",
                },
            ]),
        );
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        let expenses = adapters.expense_list().await.unwrap();

        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].category, "");
        assert_eq!(expenses[0].detail, "Lunch");
        assert_eq!(expenses[1].amount, 0.0);
        assert_eq!(expenses[1].category, "Food");
        assert_eq!(
            expenses[2],
            LedgerEntry {
                amount: 42.5,
                date: "2023-01-05".to_owned(),
                category: "Transport".to_owned(),
                detail: "Bus".to_owned(),
                kind: EntryKind::Expense,
            }
        );
    }

    #[tokio::test]
    async fn transport_errors_are_returned_unchanged() {
        let error = LedgerError::Transport("connection reset".to_owned());
        let service = StubLedgerService::default().failing(backend::MONTHLY_TOTALS, error.clone());
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        assert_eq!(adapters.monthly_totals().await, Err(error));
    }

    #[tokio::test]
    async fn malformed_list_is_a_parse_error() {
        let service =
            StubLedgerService::default().with(backend::INCOME_LIST, json!({"not": "a list"}));
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        assert!(matches!(
            adapters.income_list().await,
            Err(LedgerError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn adapters_are_idempotent() {
        let service = StubLedgerService::populated();
        let session = Session::default();
        let adapters = LedgerAdapters::new(&service, &session);

        assert_eq!(
            adapters.income_list().await,
            adapters.income_list().await
        );
        assert_eq!(
            adapters.expense_list().await,
            adapters.expense_list().await
        );
        assert_eq!(
            adapters.monthly_totals().await,
            adapters.monthly_totals().await
        );
        assert_eq!(
            adapters.monthly_income().await,
            adapters.monthly_income().await
        );
        assert_eq!(
            adapters.monthly_expense().await,
            adapters.monthly_expense().await
        );
        assert_eq!(
            adapters.category_shares().await,
            adapters.category_shares().await
        );
    }
}
