use crate::modules::expenses::adapters::outbound::expenses_in_memory::InMemoryExpenses;
use crate::shell::state::AppState;
use crate::tests::fixtures::expenses::fixed_today;
use std::sync::Arc;

/// Fresh empty store whose "today" is pinned to [`fixed_today`].
pub fn make_test_state() -> AppState {
    AppState {
        expenses: Arc::new(InMemoryExpenses::new()),
        today: fixed_today,
    }
}
