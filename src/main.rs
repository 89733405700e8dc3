#![no_std]
#![no_main]

use defmt::*;

use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Instant, Timer};
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config, Phase, Polarity, Spi};

use display_interface_spi::SPIInterface;
use embedded_hal_bus::spi::ExclusiveDevice;

use {defmt_rtt as _, panic_probe as _};

use fan_alarm_rs::display::{Status, StatusScreen};
use fan_alarm_rs::hw::{EmbassyClock, PwmSpeaker, SignalTone, TONE_REQUESTS};
use fan_alarm_rs::sh1107::SH1107;
use fan_alarm_rs::{
    songs, MelodySequencer, Step, BUTTON_DEBOUNCE_MS, DEFAULT_SONG, DISPLAY_SPI_FREQUENCY,
    SEQUENCER_POLL_MS, TEMPERATURE_SENSOR, TEMP_SAMPLE_INTERVAL_MS,
};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

#[embassy_executor::task]
async fn tone_task(mut speaker: PwmSpeaker<'static>) {
    speaker.run(&TONE_REQUESTS).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Program start");
    let peripherals = embassy_rp::init(Default::default());
    let mut delay = Delay;

    // Speaker on GPIO12 (PWM slice 6, channel A) through a 100 ohm resistor
    let pwm = Pwm::new_output_a(peripherals.PWM_SLICE6, peripherals.PIN_12, PwmConfig::default());
    let speaker = PwmSpeaker::new(pwm, embassy_rp::clocks::clk_sys_freq());
    unwrap!(spawner.spawn(tone_task(speaker)));

    // Display pins
    let dc = Output::new(peripherals.PIN_8, Level::Low);     // Data/Command
    let cs = Output::new(peripherals.PIN_9, Level::High);    // Chip Select
    let sclk = peripherals.PIN_10;                               // Serial Clock
    let mosi = peripherals.PIN_11;                               // Master Out Slave In
    let rst = Output::new(peripherals.PIN_13, Level::Low);   // Reset

    // Controls, both active low
    let alarm_switch = Input::new(peripherals.PIN_14, Pull::Up);
    let song_button = Input::new(peripherals.PIN_15, Pull::Up);

    // TMP36 on ADC0
    let mut adc = Adc::new(peripherals.ADC, Irqs, adc::Config::default());
    let mut tmp36 = adc::Channel::new_pin(peripherals.PIN_26, Pull::None);

    let mut spi_config = Config::default();
    spi_config.frequency = DISPLAY_SPI_FREQUENCY;
    spi_config.phase = Phase::CaptureOnSecondTransition;
    spi_config.polarity = Polarity::IdleHigh;

    let spi = Spi::new_txonly(peripherals.SPI1, sclk, mosi, peripherals.DMA_CH0, spi_config);
    let spi_device = unwrap!(ExclusiveDevice::new(spi, cs, Delay));
    let mut display = SH1107::new(SPIInterface::new(spi_device, dc), rst);
    if let Err(e) = display.init(&mut delay).await {
        error!("display init failed: {:?}", Debug2Format(&e));
    }

    let screen = StatusScreen::new();
    let mut sequencer = MelodySequencer::new(songs::CATALOG, EmbassyClock, SignalTone::new(&TONE_REQUESTS));
    let mut silencer = SignalTone::new(&TONE_REQUESTS);

    let mut song = DEFAULT_SONG;
    let mut alarm_enabled = alarm_switch.is_low();
    let mut celsius = None;
    let mut dirty = true;
    let mut button_was_down = false;
    let mut last_press = Instant::from_ticks(0);
    let mut last_sample = Instant::from_ticks(0);
    let mut first_sample = true;

    info!("Begin loop logic");
    loop {
        let now = Instant::now();

        let enabled = alarm_switch.is_low();
        if enabled != alarm_enabled {
            alarm_enabled = enabled;
            info!("alarm {}", if alarm_enabled { "on" } else { "off" });
            if !alarm_enabled {
                sequencer.reset();
                silencer.silence();
            }
            dirty = true;
        }

        let button_down = song_button.is_low();
        if button_down && !button_was_down && now - last_press >= Duration::from_millis(BUTTON_DEBOUNCE_MS) {
            last_press = now;
            song = songs::CATALOG.next_index(song);
            sequencer.reset();
            info!("selected song {}: {}", song, sequencer.song_name(song).unwrap_or("?"));
            dirty = true;
        }
        button_was_down = button_down;

        if alarm_enabled {
            match sequencer.poll(song) {
                Ok(Step::Started { name }) => debug!("started {}", name),
                Ok(_) => {}
                Err(e) => {
                    error!("cannot play song: {}", e);
                    song = DEFAULT_SONG;
                }
            }
        }

        if first_sample || now - last_sample >= Duration::from_millis(TEMP_SAMPLE_INTERVAL_MS) {
            first_sample = false;
            last_sample = now;
            match adc.read(&mut tmp36).await {
                Ok(raw) => {
                    let reading = TEMPERATURE_SENSOR.celsius(raw);
                    info!("temp = {} deg C", reading);
                    celsius = Some(reading);
                    dirty = true;
                }
                Err(_) => error!("sensor error"),
            }
        }

        if dirty {
            dirty = false;
            let status = Status {
                alarm_enabled,
                song: sequencer.song_name(song).unwrap_or(""),
                celsius,
            };
            let drawn = screen.draw(&mut display, &status);
            let shown = match drawn {
                Ok(()) => display.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = shown {
                warn!("display update failed: {:?}", Debug2Format(&e));
            }
        }

        Timer::after_millis(SEQUENCER_POLL_MS).await;
    }
}
