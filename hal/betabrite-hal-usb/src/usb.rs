//! USB bulk link
//!
//! USB signs enumerate with a fixed vendor/product pair and take frame
//! bytes on the first OUT endpoint of interface 0.

use std::time::Duration;

use betabrite_hal::SignLink;
use rusb::{DeviceHandle, Direction, GlobalContext, TransferType};
use tracing::{debug, info, trace, warn};

use crate::error::TransportError;

/// Vendor id every USB sign reports
pub const DEFAULT_VENDOR_ID: u16 = 0x8765;

/// Product id every USB sign reports
pub const DEFAULT_PRODUCT_ID: u16 = 0x1234;

/// Per-transfer timeout
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Open USB connection to a sign
pub struct UsbLink {
    handle: DeviceHandle<GlobalContext>,
    interface: u8,
    endpoint: u8,
    transfer_type: TransferType,
}

impl UsbLink {
    /// Open the first attached sign with the given ids
    pub fn open(vendor_id: u16, product_id: u16) -> Result<Self, TransportError> {
        let mut handle = rusb::open_device_with_vid_pid(vendor_id, product_id).ok_or(
            TransportError::DeviceNotFound {
                vendor_id,
                product_id,
            },
        )?;

        if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
            // Not supported on every platform
            debug!("auto-detach unavailable: {e}");
        }

        let device = handle.device();
        let config = device.config_descriptor(0)?;
        handle.set_active_configuration(config.number())?;

        let descriptor = config
            .interfaces()
            .next()
            .and_then(|interface| interface.descriptors().next())
            .ok_or(TransportError::NoOutEndpoint)?;
        let endpoint = descriptor
            .endpoint_descriptors()
            .find(|e| e.direction() == Direction::Out)
            .ok_or(TransportError::NoOutEndpoint)?;

        let interface = descriptor.interface_number();
        handle.claim_interface(interface)?;

        info!(
            "opened sign {vendor_id:04x}:{product_id:04x} on bus {} address {}, endpoint {:#04x}",
            device.bus_number(),
            device.address(),
            endpoint.address()
        );

        Ok(Self {
            handle,
            interface,
            endpoint: endpoint.address(),
            transfer_type: endpoint.transfer_type(),
        })
    }

    /// Open the sign with the standard ids
    pub fn open_default() -> Result<Self, TransportError> {
        Self::open(DEFAULT_VENDOR_ID, DEFAULT_PRODUCT_ID)
    }
}

impl SignLink for UsbLink {
    type Error = TransportError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), TransportError> {
        let written = match self.transfer_type {
            TransferType::Interrupt => {
                self.handle
                    .write_interrupt(self.endpoint, data, WRITE_TIMEOUT)?
            }
            _ => self.handle.write_bulk(self.endpoint, data, WRITE_TIMEOUT)?,
        };
        trace!("usb wrote {written} bytes");
        if written != data.len() {
            return Err(TransportError::ShortWrite {
                written,
                expected: data.len(),
            });
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        // Transfers complete synchronously
        Ok(())
    }
}

impl Drop for UsbLink {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.interface) {
            warn!("failed to release USB interface {}: {e}", self.interface);
        }
    }
}
