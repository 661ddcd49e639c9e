use super::intent::{StoreListEvent, StoreListMutation};
use super::reactor::StoreListReactor;
use super::state::StoreListState;
use crate::mvi::{Outbox, Reducer};

impl Reducer for StoreListReactor {
    type State = StoreListState;
    type Mutation = StoreListMutation;
    type Event = StoreListEvent;

    fn reduce(
        mut state: StoreListState,
        mutation: StoreListMutation,
        outbox: &mut Outbox<StoreListEvent>,
    ) -> StoreListState {
        match mutation {
            StoreListMutation::SetLoading(is_loading) => state.is_loading = is_loading,
            StoreListMutation::SetCenter(center) => state.center = Some(center),
            StoreListMutation::SetStores(stores) => state.stores = stores,
            StoreListMutation::SetCategory(category) => state.category = Some(category),
            StoreListMutation::RemoveStore(key) => state.stores.retain(|store| store.key() != key),
            // Deletion is a report; the server drops the store later.
            StoreListMutation::DeleteRequested { store_id } => {
                outbox.emit(StoreListEvent::Toast(format!(
                    "Deletion request for store {} sent",
                    store_id
                )));
            }
            StoreListMutation::Signal(event) => outbox.emit(event),
            StoreListMutation::ShowError(err) => {
                state.is_loading = false;
                outbox.emit(StoreListEvent::Error(err));
            }
        }
        state
    }
}
