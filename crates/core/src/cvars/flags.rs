//! Cvar flag bits

use bitflags::bitflags;

bitflags! {
    /// Flags that control how a cvar may be written and what a write triggers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct CvarFlags: u32 {
        /// Saved to the user config
        const ARCHIVE = 1 << 0;
        /// Can't be changed from the console
        const READ_ONLY = 1 << 1;
        /// Part of the video configuration, saved to the video config
        const RENDERINFO = 1 << 2;
        /// Writes require the display settings to be re-applied
        const VIDRESTART = 1 << 3;
        /// Value changed since the owner last cleared this bit
        const CHANGED = 1 << 4;
    }
}

impl CvarFlags {
    /// Flags persisted to a config file
    pub fn is_persisted(&self) -> bool {
        self.intersects(Self::ARCHIVE | Self::RENDERINFO)
    }

    /// Short tag list for `cvarlist`-style output
    pub fn tags(&self) -> String {
        let mut tags = Vec::new();
        if self.contains(Self::ARCHIVE) {
            tags.push("archive");
        }
        if self.contains(Self::READ_ONLY) {
            tags.push("read-only");
        }
        if self.contains(Self::RENDERINFO) {
            tags.push("renderinfo");
        }
        if self.contains(Self::VIDRESTART) {
            tags.push("vidrestart");
        }
        tags.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted() {
        assert!(CvarFlags::ARCHIVE.is_persisted());
        assert!((CvarFlags::RENDERINFO | CvarFlags::READ_ONLY).is_persisted());
        assert!(!CvarFlags::READ_ONLY.is_persisted());
    }

    #[test]
    fn test_tags() {
        let flags = CvarFlags::RENDERINFO | CvarFlags::VIDRESTART | CvarFlags::CHANGED;
        assert_eq!(flags.tags(), "renderinfo vidrestart");
        assert_eq!(CvarFlags::empty().tags(), "");
    }
}
