use crate::models::Transaction;
use crate::types::{Selection, TransactionKind};

/// Header names the dashboard cannot render without.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "type",
    "amount",
    "oldbalanceOrg",
    "newbalanceOrig",
    "isFraud",
    "isFlaggedFraud"
];

/// Cell values of a column that is not part of [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>)
}

impl ColumnData {
    /// Treats the column as numeric when at least one cell parses as a float and
    /// every non-empty cell does. Empty numeric cells become NaN.
    pub fn infer(cells: Vec<String>) -> Self {
        let mut parsed = Vec::with_capacity(cells.len());
        let mut seen_number = false;

        for cell in &cells {
            if cell.is_empty() {
                parsed.push(f64::NAN);
                continue;
            }

            match cell.parse::<f64>() {
                Ok(value) => {
                    seen_number = true;
                    parsed.push(value);
                }
                Err(_) => return ColumnData::Text(cells)
            }
        }

        if seen_number {
            ColumnData::Numeric(parsed)
        } else {
            ColumnData::Text(cells)
        }
    }

    fn cell_text(&self, row: usize) -> String {
        match self {
            ColumnData::Numeric(values) => values.get(row).map(|value| format_number(*value)).unwrap_or_default(),
            ColumnData::Text(values) => values.get(row).cloned().unwrap_or_default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtraColumn {
    pub name: String,
    pub data: ColumnData
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnSource {
    Kind,
    Amount,
    OldBalanceOrigin,
    NewBalanceOrigin,
    IsFraud,
    IsFlaggedFraud,
    Extra(usize)
}

impl ColumnSource {
    fn required(name: &str) -> Option<Self> {
        match name {
            "type" => Some(Self::Kind),
            "amount" => Some(Self::Amount),
            "oldbalanceOrg" => Some(Self::OldBalanceOrigin),
            "newbalanceOrig" => Some(Self::NewBalanceOrigin),
            "isFraud" => Some(Self::IsFraud),
            "isFlaggedFraud" => Some(Self::IsFlaggedFraud),
            _ => None
        }
    }
}

/// The fully loaded transaction table.
///
/// Columns keep the order of the input header. The table itself is never
/// mutated after loading; narrowing happens through [`TableView`].
#[derive(Debug, Clone)]
pub struct TransactionTable {
    columns: Vec<(String, ColumnSource)>,
    rows: Vec<Transaction>,
    extras: Vec<ExtraColumn>
}

impl TransactionTable {
    /// Assembles a table from parsed rows and the non-required columns.
    ///
    /// `headers` is the input header in file order. Every header that is not in
    /// [`REQUIRED_COLUMNS`] must have a matching entry in `extras`; headers
    /// without one are dropped.
    pub fn new(headers: Vec<String>, rows: Vec<Transaction>, extras: Vec<ExtraColumn>) -> Self {
        let columns = headers.into_iter()
            .filter_map(|name| {
                let source = ColumnSource::required(&name).or_else(|| {
                    extras.iter().position(|extra| extra.name == name).map(ColumnSource::Extra)
                })?;
                Some((name, source))
            })
            .collect();

        Self { columns, rows, extras }
    }

    /// Builds a table holding only the required columns.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        let headers = REQUIRED_COLUMNS.iter().map(|name| name.to_string()).collect();
        Self::new(headers, rows, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Distinct transaction kinds in first-seen order; the options of the category filter.
    pub fn distinct_kinds(&self) -> Vec<TransactionKind> {
        let mut kinds = Vec::new();

        for transaction in &self.rows {
            if !kinds.contains(&transaction.kind) {
                kinds.push(transaction.kind);

                if kinds.len() == TransactionKind::ALL.len() {
                    break;
                }
            }
        }

        kinds
    }

    fn numeric_value(&self, row: usize, source: ColumnSource) -> Option<f64> {
        let transaction = &self.rows[row];

        match source {
            ColumnSource::Kind => None,
            ColumnSource::Amount => Some(transaction.amount),
            ColumnSource::OldBalanceOrigin => Some(transaction.old_balance_origin),
            ColumnSource::NewBalanceOrigin => Some(transaction.new_balance_origin),
            ColumnSource::IsFraud => Some(f64::from(u8::from(transaction.is_fraud))),
            ColumnSource::IsFlaggedFraud => Some(f64::from(u8::from(transaction.is_flagged_fraud))),
            ColumnSource::Extra(index) => match &self.extras[index].data {
                ColumnData::Numeric(values) => values.get(row).copied(),
                ColumnData::Text(_) => None
            }
        }
    }

    fn is_numeric(&self, source: ColumnSource) -> bool {
        match source {
            ColumnSource::Kind => false,
            ColumnSource::Extra(index) => matches!(self.extras[index].data, ColumnData::Numeric(_)),
            _ => true
        }
    }

    fn cell_text(&self, row: usize, source: ColumnSource) -> String {
        let transaction = &self.rows[row];

        match source {
            ColumnSource::Kind => transaction.kind.to_string(),
            ColumnSource::IsFraud => u8::from(transaction.is_fraud).to_string(),
            ColumnSource::IsFlaggedFraud => u8::from(transaction.is_flagged_fraud).to_string(),
            ColumnSource::Extra(index) => self.extras[index].data.cell_text(row),
            numeric => self.numeric_value(row, numeric).map(format_number).unwrap_or_default()
        }
    }
}

/// A numeric column gathered over the rows of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn<'a> {
    pub name: &'a str,
    pub values: Vec<f64>
}

/// The first rows of a view rendered as text, one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>
}

/// A read-only window onto a [`TransactionTable`], optionally narrowed to a
/// subset of its rows.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a TransactionTable,
    rows: Option<Vec<usize>>
}

impl<'a> TableView<'a> {
    pub fn full(table: &'a TransactionTable) -> Self {
        Self { table, rows: None }
    }

    /// Keeps the rows whose kind is selected. An empty selection keeps every row.
    pub fn filtered(table: &'a TransactionTable, selection: &Selection) -> Self {
        if selection.is_empty() {
            return Self::full(table);
        }

        let rows = table.rows.iter()
            .enumerate()
            .filter(|(_, transaction)| selection.contains(transaction.kind))
            .map(|(index, _)| index)
            .collect();

        Self { table, rows: Some(rows) }
    }

    pub fn table(&self) -> &'a TransactionTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.rows.as_ref().map_or(self.table.len(), Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_filtered(&self) -> bool {
        self.rows.is_some()
    }

    pub fn row_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let all = match self.rows {
            None => 0..self.table.len(),
            Some(_) => 0..0
        };

        all.chain(self.rows.iter().flatten().copied())
    }

    pub fn transactions(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        let table = self.table;
        self.row_indices().map(move |index| &table.rows[index])
    }

    /// Every numeric column in header order, gathered over this view's rows.
    pub fn numeric_columns(&self) -> Vec<NumericColumn<'a>> {
        let table = self.table;

        table.columns.iter()
            .filter(|(_, source)| table.is_numeric(*source))
            .map(|(name, source)| NumericColumn {
                name: name.as_str(),
                values: self.row_indices()
                    .map(|row| table.numeric_value(row, *source).unwrap_or(f64::NAN))
                    .collect()
            })
            .collect()
    }

    pub fn head(&self, count: usize) -> Preview {
        let headers = self.table.column_names().map(String::from).collect();
        let rows = self.row_indices()
            .take(count)
            .map(|row| {
                self.table.columns.iter()
                    .map(|(_, source)| self.table.cell_text(row, *source))
                    .collect()
            })
            .collect();

        Preview { headers, rows }
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}
