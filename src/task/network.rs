//! Network and WiFi management task
//! Brings up the Wi-Fi chip and serves message polls and read receipts

use core::fmt::Write;

use cyw43::JoinOptions;
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_net::{Config, Stack, StackResources};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};
use heapless::String;
use static_cell::StaticCell;

use pico_msgbox::inbox::ERROR_CAPACITY;

use crate::api;
use crate::config::{WIFI_JOIN_ATTEMPTS, WIFI_PASSWORD, WIFI_SSID};
use crate::event::{Event, send_event};
use crate::state::get_state;
use crate::task::display::signal_redraw;

/// Signal for triggering a message poll
static POLL_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal for triggering a read receipt
static RECEIPT_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Asks the network task to poll the message service
pub fn signal_poll() {
    POLL_SIGNAL.signal(());
}

/// Asks the network task to deliver a read receipt
pub fn signal_receipt() {
    RECEIPT_SIGNAL.signal(());
}

/// WiFi peripherals needed for initialization
pub struct WifiPeripherals {
    pub pwr_pin: embassy_rp::Peri<'static, PIN_23>,
    pub cs_pin: embassy_rp::Peri<'static, PIN_25>,
    pub pio: embassy_rp::Peri<'static, PIO0>,
    pub dio_pin: embassy_rp::Peri<'static, PIN_24>,
    pub clk_pin: embassy_rp::Peri<'static, PIN_29>,
    pub dma_ch: embassy_rp::Peri<'static, DMA_CH0>,
}

/// CYW43 runner task
#[embassy_executor::task]
async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Network stack runner task
#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// Network worker task - joins the configured network once at boot, then
/// handles poll and receipt requests. A failed join is recorded into the
/// inbox error state and the device keeps running; every poll interval
/// exercises the network path again.
#[embassy_executor::task]
pub async fn network_worker(spawner: Spawner, peripherals: WifiPeripherals) -> ! {
    info!("Network worker task started");

    // Load CYW43 firmware
    let fw = include_bytes!("../../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../../cyw43-firmware/43439A0_clm.bin");

    // Setup PIO for CYW43 SPI
    let pwr = Output::new(peripherals.pwr_pin, Level::Low);
    let cs = Output::new(peripherals.cs_pin, Level::High);

    embassy_rp::bind_interrupts!(struct Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    });

    let mut pio = Pio::new(peripherals.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        peripherals.dio_pin,
        peripherals.clk_pin,
        peripherals.dma_ch,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;

    crate::spawn_unwrap(&spawner, cyw43_task(runner));

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;
    info!("WiFi chip initialized");

    // Init network stack
    static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();
    let seed = Instant::now().as_micros();
    let (stack, runner) = embassy_net::new(
        net_device,
        Config::dhcpv4(Default::default()),
        RESOURCES.init(StackResources::new()),
        seed,
    );
    crate::spawn_unwrap(&spawner, net_task(runner));

    // Join once at boot; the loading screen is up meanwhile.
    let mut joined = false;
    for attempt in 1..=WIFI_JOIN_ATTEMPTS {
        info!("Joining WiFi network {} (attempt {})", WIFI_SSID, attempt);
        match control
            .join(WIFI_SSID, JoinOptions::new(WIFI_PASSWORD.as_bytes()))
            .await
        {
            Ok(()) => {
                joined = true;
                break;
            }
            Err(err) => {
                warn!("WiFi join failed: {:?}", err.status);
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    }

    if joined {
        info!("WiFi joined, waiting for link...");
        stack.wait_link_up().await;
        stack.wait_config_up().await;
        if let Some(config) = stack.config_v4() {
            info!("IP address: {}", config.address);
        }
        info!("Connected to Wi-Fi");
    } else {
        error!("Giving up on WiFi until next power cycle");
        {
            let mut state = get_state().await;
            state.inbox.record_error("Wi-Fi join failed");
        }
    }

    // Boot is over either way: drop the loading screen.
    {
        let mut state = get_state().await;
        state.busy = None;
    }
    signal_redraw();

    let mut rx_buf = [0u8; api::RESPONSE_BUFFER_SIZE];
    loop {
        match select(POLL_SIGNAL.wait(), RECEIPT_SIGNAL.wait()).await {
            Either::First(()) => poll_inbox(stack, &mut rx_buf).await,
            Either::Second(()) => deliver_receipt(stack, &mut rx_buf).await,
        }
    }
}

/// One poll of the message service, recording the outcome in the inbox.
async fn poll_inbox(stack: Stack<'static>, rx_buf: &mut [u8]) {
    info!("Polling message service");
    let seed = Instant::now().as_micros();
    match api::poll_messages(stack, seed, rx_buf).await {
        Ok(body) => {
            let fresh = {
                let mut state = get_state().await;
                state.inbox.record_message(body)
            };
            if fresh {
                info!("New message received");
                send_event(Event::NewMessage).await;
            } else {
                send_event(Event::PollUnchanged).await;
            }
        }
        Err(err) => {
            warn!("Poll failed: {}", err);
            let mut text: String<ERROR_CAPACITY> = String::new();
            let _ = write!(text, "{err}");
            {
                let mut state = get_state().await;
                state.inbox.record_error(&text);
            }
            send_event(Event::PollFailed).await;
        }
    }
}

/// Deliver the read receipt for the acknowledged message. Failures are
/// logged and the outcome is otherwise discarded.
async fn deliver_receipt(stack: Stack<'static>, rx_buf: &mut [u8]) {
    {
        let mut state = get_state().await;
        state.busy = Some("Sending read status");
    }
    signal_redraw();

    let seed = Instant::now().as_micros();
    let outcome = api::send_read_receipt(stack, seed, rx_buf).await;

    {
        let mut state = get_state().await;
        state.busy = None;
    }

    match outcome {
        Ok(()) => {
            info!("Read receipt delivered");
            send_event(Event::ReceiptDelivered).await;
        }
        Err(err) => {
            warn!("Read receipt failed: {}", err);
            send_event(Event::ReceiptFailed).await;
        }
    }
}
