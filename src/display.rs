//! Display surface: independent text regions updated over a channel.
//!
//! The orchestrator and its fan-out tasks write through a cloneable
//! handle; a single consumer task applies updates in arrival order, so
//! region state is never mutated from two tasks at once. The status
//! region is shared between writers and is last-writer-wins.

use tokio::sync::mpsc;
use tracing::trace;

/// The text regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Status,
    Latitude,
    Longitude,
    Place,
    Weather,
    Precipitation,
    Wind,
}

/// One write to one region.
#[derive(Debug, Clone)]
pub struct Update {
    pub region: Region,
    pub text: String,
}

/// Current text of every region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenText {
    pub status: String,
    pub latitude: String,
    pub longitude: String,
    pub place: String,
    pub weather: String,
    pub precipitation: String,
    pub wind: String,
}

impl Default for ScreenText {
    fn default() -> Self {
        Self {
            status: String::new(),
            latitude: "Latitude: --".to_string(),
            longitude: "Longitude: --".to_string(),
            place: "Location: --".to_string(),
            weather: "Weather: --".to_string(),
            precipitation: "Precipitation: --".to_string(),
            wind: "Wind: --".to_string(),
        }
    }
}

impl ScreenText {
    fn apply(&mut self, update: Update) {
        let slot = match update.region {
            Region::Status => &mut self.status,
            Region::Latitude => &mut self.latitude,
            Region::Longitude => &mut self.longitude,
            Region::Place => &mut self.place,
            Region::Weather => &mut self.weather,
            Region::Precipitation => &mut self.precipitation,
            Region::Wind => &mut self.wind,
        };
        *slot = update.text;
    }
}

/// Write capability handed to the orchestrator and its fan-out tasks.
/// Owned for the duration of a screen session; dropping every clone
/// ends the consumer.
#[derive(Debug, Clone)]
pub struct DisplayHandle {
    tx: mpsc::UnboundedSender<Update>,
}

impl DisplayHandle {
    pub fn set_status(&self, text: impl Into<String>) {
        self.set(Region::Status, text);
    }

    pub fn set_latitude(&self, text: impl Into<String>) {
        self.set(Region::Latitude, text);
    }

    pub fn set_longitude(&self, text: impl Into<String>) {
        self.set(Region::Longitude, text);
    }

    pub fn set_place(&self, text: impl Into<String>) {
        self.set(Region::Place, text);
    }

    pub fn set_weather(&self, text: impl Into<String>) {
        self.set(Region::Weather, text);
    }

    pub fn set_precipitation(&self, text: impl Into<String>) {
        self.set(Region::Precipitation, text);
    }

    pub fn set_wind(&self, text: impl Into<String>) {
        self.set(Region::Wind, text);
    }

    fn set(&self, region: Region, text: impl Into<String>) {
        // A write after screen teardown has nowhere to land; dropped.
        let _ = self.tx.send(Update {
            region,
            text: text.into(),
        });
    }
}

/// Consumer side of the display.
#[derive(Debug)]
pub struct Display {
    rx: mpsc::UnboundedReceiver<Update>,
    text: ScreenText,
    echo: bool,
}

impl Display {
    /// Create a display and its write handle. With `echo` set, every
    /// update is also printed as a terminal line.
    #[must_use]
    pub fn new(echo: bool) -> (Self, DisplayHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                rx,
                text: ScreenText::default(),
                echo,
            },
            DisplayHandle { tx },
        )
    }

    /// Apply updates until every handle is dropped; returns the final
    /// region texts.
    pub async fn run(mut self) -> ScreenText {
        while let Some(update) = self.rx.recv().await {
            trace!(region = ?update.region, text = %update.text, "display update");
            if self.echo {
                println!("{}", update.text);
            }
            self.text.apply(update);
        }
        self.text
    }
}
