use super::intent::{FoodTruckDetailEvent, FoodTruckDetailMutation};
use super::reactor::FoodTruckDetailReactor;
use super::state::FoodTruckDetailState;
use crate::model::Feedback;
use crate::mvi::{Outbox, Reducer};

impl Reducer for FoodTruckDetailReactor {
    type State = FoodTruckDetailState;
    type Mutation = FoodTruckDetailMutation;
    type Event = FoodTruckDetailEvent;

    fn reduce(
        mut state: FoodTruckDetailState,
        mutation: FoodTruckDetailMutation,
        outbox: &mut Outbox<FoodTruckDetailEvent>,
    ) -> FoodTruckDetailState {
        match mutation {
            FoodTruckDetailMutation::SetLoading(is_loading) => state.is_loading = is_loading,
            FoodTruckDetailMutation::SetCurrentLocation(location) => {
                state.current_location = location
            }
            FoodTruckDetailMutation::SetStore(store) => state.store = store,
            FoodTruckDetailMutation::SetFeedbacks(feedbacks) => {
                state.store.feedback_count = Feedback::total(&feedbacks);
                state.store.feedbacks = feedbacks;
            }
            FoodTruckDetailMutation::Signal(event) => outbox.emit(event),
            FoodTruckDetailMutation::ShowError(err) => {
                state.is_loading = false;
                outbox.emit(FoodTruckDetailEvent::Error(err));
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn feedback(kind: &str, count: u32) -> Feedback {
        Feedback {
            kind: kind.to_string(),
            count,
        }
    }

    #[test]
    fn new_feedbacks_replace_breakdown_and_total() {
        let mut state = FoodTruckDetailState::default();
        state.store.feedbacks = vec![feedback("FOOD_IS_DELICIOUS", 1)];
        state.store.feedback_count = 1;

        let state = FoodTruckDetailReactor::reduce(
            state,
            FoodTruckDetailMutation::SetFeedbacks(vec![
                feedback("FOOD_IS_DELICIOUS", 2),
                feedback("BOSS_IS_KIND", 3),
            ]),
            &mut Outbox::new(),
        );
        assert_eq!(state.store.feedback_count, 5);
        assert_eq!(state.store.feedbacks.len(), 2);
    }

    #[test]
    fn error_stops_loading() {
        let state = FoodTruckDetailState {
            is_loading: true,
            ..FoodTruckDetailState::default()
        };
        let err = ServiceError::invalid("bad");
        let mut outbox = Outbox::new();
        let state = FoodTruckDetailReactor::reduce(
            state,
            FoodTruckDetailMutation::ShowError(err.clone()),
            &mut outbox,
        );
        assert!(!state.is_loading);
        assert_eq!(outbox.into_events(), vec![FoodTruckDetailEvent::Error(err)]);
    }
}
