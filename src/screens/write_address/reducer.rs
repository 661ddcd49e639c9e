use super::intent::{WriteAddressEvent, WriteAddressMutation};
use super::reactor::WriteAddressReactor;
use super::state::WriteAddressState;
use crate::mvi::{Outbox, Reducer};

impl Reducer for WriteAddressReactor {
    type State = WriteAddressState;
    type Mutation = WriteAddressMutation;
    type Event = WriteAddressEvent;

    fn reduce(
        mut state: WriteAddressState,
        mutation: WriteAddressMutation,
        outbox: &mut Outbox<WriteAddressEvent>,
    ) -> WriteAddressState {
        match mutation {
            WriteAddressMutation::SetNearStores(stores) => state.near_stores = stores,
            WriteAddressMutation::SetAddress(address) => state.address = address,
            WriteAddressMutation::MoveCamera(center) => state.camera_position = Some(center),
            WriteAddressMutation::AddressChecked { exists, location } => {
                let address = state.address.clone();
                outbox.emit(if exists {
                    WriteAddressEvent::ConfirmPopup { address }
                } else {
                    WriteAddressEvent::PushAddressDetail { address, location }
                });
            }
            WriteAddressMutation::Signal(event) => outbox.emit(event),
            WriteAddressMutation::ShowError(err) => outbox.emit(WriteAddressEvent::Error(err)),
        }
        state
    }
}
