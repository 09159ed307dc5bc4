use contracts::shared::datatable_options::DataTableOptions;
use contracts::shared::table_shape::TableShape;

use crate::error::UiError;

/// A table the widget may take over.
pub trait WidgetTable {
    fn shape(&self) -> TableShape;
}

/// The table widget library, present only when the page loaded it.
pub trait TableWidget {
    type Table: WidgetTable;

    fn is_active(&self, table: &Self::Table) -> bool;

    fn activate(&self, table: &Self::Table, options: &DataTableOptions) -> Result<(), UiError>;

    fn reload(&self, selector: &str) -> Result<(), UiError>;
}

/// What one initialization pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub activated: usize,
    pub already_active: usize,
    pub malformed: usize,
    pub failed: usize,
}

/// Activates the widget on valid tables.
///
/// `widget` is `None` when the library is not on the page; every call is then
/// a logged no-op.
pub struct TableInitializer<W> {
    widget: Option<W>,
    options: DataTableOptions,
}

impl<W: TableWidget> TableInitializer<W> {
    pub fn new(widget: Option<W>, options: DataTableOptions) -> Self {
        Self { widget, options }
    }

    pub fn is_enabled(&self) -> bool {
        self.widget.is_some()
    }

    pub fn initialize<'a, I>(&self, tables: I) -> InitReport
    where
        I: IntoIterator<Item = &'a W::Table>,
        W::Table: 'a,
    {
        let mut report = InitReport::default();
        let Some(widget) = &self.widget else {
            log::info!("DataTables library not loaded");
            return report;
        };

        for table in tables {
            if widget.is_active(table) {
                log::debug!("DataTable already initialized, skipping");
                report.already_active += 1;
                continue;
            }

            if let Err(e) = table.shape().check() {
                log::warn!("{}", e);
                report.malformed += 1;
                continue;
            }

            match widget.activate(table, &self.options) {
                Ok(()) => {
                    log::debug!("DataTable initialized successfully");
                    report.activated += 1;
                }
                Err(e) => {
                    log::error!("Error initializing DataTable: {}", e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    pub fn reload(&self, selector: &str) -> Result<(), UiError> {
        match &self.widget {
            Some(widget) => widget.reload(selector),
            None => {
                log::info!("DataTables library not loaded");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct FakeTable {
        id: usize,
        shape: TableShape,
    }

    impl WidgetTable for FakeTable {
        fn shape(&self) -> TableShape {
            self.shape
        }
    }

    #[derive(Default)]
    struct FakeWidget {
        active: RefCell<HashSet<usize>>,
        activations: RefCell<Vec<usize>>,
        reloads: RefCell<Vec<String>>,
        fail_on: Option<usize>,
    }

    impl TableWidget for FakeWidget {
        type Table = FakeTable;

        fn is_active(&self, table: &FakeTable) -> bool {
            self.active.borrow().contains(&table.id)
        }

        fn activate(&self, table: &FakeTable, options: &DataTableOptions) -> Result<(), UiError> {
            assert_eq!(options.page_length, 25);
            self.activations.borrow_mut().push(table.id);
            if self.fail_on == Some(table.id) {
                return Err(UiError::Js("Cannot read properties of undefined".into()));
            }
            self.active.borrow_mut().insert(table.id);
            Ok(())
        }

        fn reload(&self, selector: &str) -> Result<(), UiError> {
            self.reloads.borrow_mut().push(selector.to_string());
            Ok(())
        }
    }

    fn table(id: usize, header: usize, has_body: bool, body: usize) -> FakeTable {
        FakeTable {
            id,
            shape: TableShape {
                header_cells: header,
                first_header_row_cells: header,
                has_body,
                first_body_row_cells: body,
            },
        }
    }

    #[test]
    fn test_valid_tables_activated_once_across_runs() {
        let tables = vec![table(1, 3, true, 3), table(2, 5, true, 0)];
        let init = TableInitializer::new(Some(FakeWidget::default()), DataTableOptions::default());

        let first = init.initialize(&tables);
        let second = init.initialize(&tables);

        assert_eq!(first.activated, 2);
        assert_eq!(second.activated, 0);
        assert_eq!(second.already_active, 2);
        let widget = init.widget.as_ref().unwrap();
        assert_eq!(*widget.activations.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_malformed_tables_never_activated() {
        let tables = vec![
            table(1, 0, true, 0),
            table(2, 3, false, 0),
            table(3, 4, true, 3),
        ];
        let init = TableInitializer::new(Some(FakeWidget::default()), DataTableOptions::default());

        let report = init.initialize(&tables);

        assert_eq!(report.malformed, 3);
        assert_eq!(report.activated, 0);
        assert!(init.widget.as_ref().unwrap().activations.borrow().is_empty());
    }

    #[test]
    fn test_activation_failure_does_not_stop_others() {
        let tables = vec![table(1, 2, true, 2), table(2, 2, true, 2), table(3, 2, true, 2)];
        let widget = FakeWidget {
            fail_on: Some(2),
            ..FakeWidget::default()
        };
        let init = TableInitializer::new(Some(widget), DataTableOptions::default());

        let report = init.initialize(&tables);

        assert_eq!(
            report,
            InitReport {
                activated: 2,
                already_active: 0,
                malformed: 0,
                failed: 1,
            }
        );
    }

    #[test]
    fn test_disabled_when_library_missing() {
        let tables = vec![table(1, 2, true, 2)];
        let init: TableInitializer<FakeWidget> =
            TableInitializer::new(None, DataTableOptions::default());

        assert!(!init.is_enabled());
        assert_eq!(init.initialize(&tables), InitReport::default());
        assert_eq!(init.reload("#salesTable"), Ok(()));
    }

    #[test]
    fn test_reload_forwards_selector() {
        let init = TableInitializer::new(Some(FakeWidget::default()), DataTableOptions::default());
        init.reload("#stockTable").unwrap();
        assert_eq!(
            *init.widget.as_ref().unwrap().reloads.borrow(),
            vec!["#stockTable".to_string()]
        );
    }
}
