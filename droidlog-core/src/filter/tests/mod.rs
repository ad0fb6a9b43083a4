
pub(super) const SAMPLE: &str = "--------- beginning of main\n\
12-31 14:19:40.332 E/ConnectivityService(  812): DNS lookup failed\n\
12-31 14:19:40.333 W/WifiService(  812): weak signal\n\
free text mentioning E/ConnectivityService(1): not a record\n\
12-31 14:19:40.334 E/wifi hal( 733): driver timeout\r\n\
12-31 14:19:40.335 I/ActivityManager(  512): Start proc\n\
12-31 14:19:40.336 E/WIFI_MONITOR( 733): socket closed\n";
