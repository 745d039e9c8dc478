//! Delivery interval types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::NodeError;

/// Schedule a batch export runs on
///
/// Schedules without a named variant are kept in `Other` so they pass
/// through unchanged. Serialized as the bare schedule name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BatchExportInterval {
    Hour,
    Day,
    Week,
    Every5Minutes,
    Other(String),
}

impl BatchExportInterval {
    pub fn as_str(&self) -> &str {
        match self {
            BatchExportInterval::Hour => "hour",
            BatchExportInterval::Day => "day",
            BatchExportInterval::Week => "week",
            BatchExportInterval::Every5Minutes => "every 5 minutes",
            BatchExportInterval::Other(interval) => interval,
        }
    }
}

impl std::fmt::Display for BatchExportInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchExportInterval {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(NodeError::UnknownInterval(s.to_string())),
            "hour" => Ok(BatchExportInterval::Hour),
            "day" => Ok(BatchExportInterval::Day),
            "week" => Ok(BatchExportInterval::Week),
            "every 5 minutes" => Ok(BatchExportInterval::Every5Minutes),
            other => Ok(BatchExportInterval::Other(other.to_string())),
        }
    }
}

impl Serialize for BatchExportInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BatchExportInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How often a destination receives data
///
/// Serialized as a bare string: `"realtime"` or the batch interval name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DestinationInterval {
    Realtime,
    Batch(BatchExportInterval),
}

impl DestinationInterval {
    pub fn as_str(&self) -> &str {
        match self {
            DestinationInterval::Realtime => "realtime",
            DestinationInterval::Batch(interval) => interval.as_str(),
        }
    }

    pub fn is_realtime(&self) -> bool {
        matches!(self, DestinationInterval::Realtime)
    }
}

impl From<BatchExportInterval> for DestinationInterval {
    fn from(interval: BatchExportInterval) -> Self {
        DestinationInterval::Batch(interval)
    }
}

impl std::fmt::Display for DestinationInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationInterval {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "realtime" {
            return Ok(DestinationInterval::Realtime);
        }
        s.parse().map(DestinationInterval::Batch)
    }
}

impl Serialize for DestinationInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DestinationInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_interval_serde() {
        let interval: BatchExportInterval = serde_json::from_value(json!("every 5 minutes")).unwrap();
        assert_eq!(interval, BatchExportInterval::Every5Minutes);
        assert_eq!(serde_json::to_value(&interval).unwrap(), json!("every 5 minutes"));
    }

    #[test]
    fn test_unlisted_batch_interval_passes_through() {
        let interval: BatchExportInterval = serde_json::from_value(json!("every 15 minutes")).unwrap();
        assert_eq!(
            interval,
            BatchExportInterval::Other("every 15 minutes".to_string())
        );
        assert_eq!(serde_json::to_value(&interval).unwrap(), json!("every 15 minutes"));
    }

    #[test]
    fn test_empty_batch_interval_is_rejected() {
        let err = "  ".parse::<BatchExportInterval>().unwrap_err();
        assert!(matches!(err, NodeError::UnknownInterval(_)));
        assert!(serde_json::from_value::<BatchExportInterval>(json!("")).is_err());
    }

    #[test]
    fn test_destination_interval_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(DestinationInterval::Realtime).unwrap(),
            json!("realtime")
        );
        assert_eq!(
            serde_json::to_value(DestinationInterval::Batch(BatchExportInterval::Hour)).unwrap(),
            json!("hour")
        );
    }

    #[test]
    fn test_destination_interval_parse() {
        assert!("realtime".parse::<DestinationInterval>().unwrap().is_realtime());
        assert_eq!(
            "day".parse::<DestinationInterval>().unwrap(),
            DestinationInterval::Batch(BatchExportInterval::Day)
        );
        assert_eq!(
            "fortnight".parse::<DestinationInterval>().unwrap(),
            DestinationInterval::Batch(BatchExportInterval::Other("fortnight".to_string()))
        );
        assert!("".parse::<DestinationInterval>().is_err());
    }
}
