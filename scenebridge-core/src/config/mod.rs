pub mod bridge_desc;
pub mod capabilities;

pub use bridge_desc::SceneBridgeDesc;
pub use capabilities::PlatformCapabilities;
