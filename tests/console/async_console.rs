use std::cell::Cell;

use futures::executor::block_on;
use libconsole::console::*;

use crate::mock::MockUart;

#[test]
fn test_async_session() {
    let hits = Cell::new(0u32);
    let on_ping = |_: &[u8]| hits.set(hits.get() + 1);

    let mut console: Console<_, &dyn Fn(&[u8])> =
        Console::new(MockUart::new(&["ping", "", "nope"]));
    console.register("ping", &on_ping).unwrap();

    block_on(async {
        assert_eq!(console.init_async().await, Ok(()));
        assert_eq!(console.run_once_async().await, Ok(Dispatch::Handled));
        assert_eq!(console.run_once_async().await, Ok(Dispatch::Empty));
        assert_eq!(console.run_once_async().await, Ok(Dispatch::Unknown));
    });

    assert_eq!(hits.get(), 1);
    assert_eq!(
        console.uart().written(),
        "> > > Unknown command: nope\r\n> "
    );
}

#[test]
fn test_async_channel_not_ready() {
    let mut uart = MockUart::new(&[]);
    uart.initialized = false;
    let mut console: Console<_> = Console::new(uart);

    assert_eq!(block_on(console.init_async()), Err(Error::ChannelNotReady));
    assert!(!console.is_started());
}

#[test]
fn test_async_receive_failure() {
    let mut uart = MockUart::new(&["ping"]);
    uart.fail_receive = true;
    let mut console: Console<_> = Console::new(uart);

    assert_eq!(block_on(console.run_once_async()), Err(Error::ChannelError));
    assert_eq!(console.uart().written(), "");
}

#[test]
fn test_async_print() {
    let mut console: Console<_> = Console::new(MockUart::new(&[]));

    assert_eq!(block_on(console.print_async("")), Ok(Status::Empty));
    assert_eq!(block_on(console.print_async("ok\r\n")), Ok(Status::Sent));
    assert_eq!(block_on(console.prompt_async()), Ok(Status::Sent));
    assert_eq!(console.uart().written(), "ok\r\n> ");

    console.uart_mut().fail_transmit = true;
    assert_eq!(block_on(console.print_async("x")), Err(Error::TransmitError));
}
