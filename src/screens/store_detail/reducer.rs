use super::intent::{StoreDetailEvent, StoreDetailMutation};
use super::reactor::StoreDetailReactor;
use super::state::StoreDetailState;
use crate::mvi::{Outbox, Reducer};

impl Reducer for StoreDetailReactor {
    type State = StoreDetailState;
    type Mutation = StoreDetailMutation;
    type Event = StoreDetailEvent;

    fn reduce(
        mut state: StoreDetailState,
        mutation: StoreDetailMutation,
        outbox: &mut Outbox<StoreDetailEvent>,
    ) -> StoreDetailState {
        match mutation {
            StoreDetailMutation::SetLoading(is_loading) => state.is_loading = is_loading,
            StoreDetailMutation::SetStore(store) => state.store = store,
            StoreDetailMutation::SetCurrentLocation(location) => state.current_location = location,
            StoreDetailMutation::SetBookmark(is_bookmarked) => {
                state.store.is_bookmarked = is_bookmarked
            }
            StoreDetailMutation::PrependPhotos(photos) => {
                state.store.photos.splice(0..0, photos);
            }
            StoreDetailMutation::DeletePhoto { photo_id } => {
                if let Some(index) = state.store.photos.iter().position(|p| p.id == photo_id) {
                    state.store.photos.remove(index);
                }
            }
            StoreDetailMutation::AddReview(review) => state.store.reviews.push(review),
            StoreDetailMutation::Signal(event) => outbox.emit(event),
            StoreDetailMutation::ShowError(err) => {
                state.is_loading = false;
                outbox.emit(StoreDetailEvent::Error(err));
            }
        }
        state
    }
}
