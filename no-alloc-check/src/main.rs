//! Links the byte queue into a bare-metal binary without a global allocator.
//!
//! If anything in the default build of `tq-byte-queue` needs `alloc`, linking this binary fails
//! with "no global memory allocator found".
#![no_main]
#![no_std]


use core::panic::PanicInfo;

use cortex_m as _;
use cortex_m_rt::entry;
use tq_byte_queue::{LastByte, SharedByteQueue, TelemetryQueue};


static OUTGOING: SharedByteQueue<16> = SharedByteQueue::with_policy(LastByte::Deliver);


#[panic_handler]
fn handle_panic(_info: &PanicInfo) -> ! {
    loop {
    }
}


#[entry]
fn main() -> ! {
    let mut queue = TelemetryQueue::new();
    loop {
        queue.push(1);
        queue.extend_from_slice(b"telemetry");
        let value = queue.pop();
        queue.clear();

        OUTGOING.push(value);
        let _ = core::hint::black_box(OUTGOING.pop());
    }
}
