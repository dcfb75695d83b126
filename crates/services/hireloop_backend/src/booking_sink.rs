// --- File: crates/services/hireloop_backend/src/booking_sink.rs ---
use hireloop_common::{BookingRequest, BookingSink};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Hands booking requests to the consumer task through a channel.
#[derive(Debug, Clone)]
pub struct ChannelBookingSink {
    sender: UnboundedSender<BookingRequest>,
}

/// Creates the sink and the receiving end for the consumer.
pub fn channel() -> (ChannelBookingSink, UnboundedReceiver<BookingRequest>) {
    let (sender, receiver) = unbounded_channel();
    (ChannelBookingSink { sender }, receiver)
}

impl BookingSink for ChannelBookingSink {
    fn emit(&self, request: BookingRequest) {
        let id = request.id;
        if self.sender.send(request).is_err() {
            error!("Booking consumer is gone, dropping booking request {}", id);
        }
    }
}

/// Consumes booking requests until every sender is dropped.
///
/// Persistence, notifications and payment are outside this service; requests
/// are only logged here.
pub fn spawn_booking_log(mut receiver: UnboundedReceiver<BookingRequest>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = receiver.recv().await {
            info!(
                booking_id = %request.id,
                listing_id = %request.listing_id,
                date = %request.date,
                slot = %request.slot,
                user_ref = %request.user_ref,
                "Booking requested"
            );
        }
        info!("Booking consumer stopped");
    })
}
